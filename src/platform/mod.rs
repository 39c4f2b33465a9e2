// NameFinder - platform/mod.rs
//
// Platform abstraction layer: config directories, config.toml, and
// locating the name list on disk.
// Dependencies: standard library, directories crate, util, core::export.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
