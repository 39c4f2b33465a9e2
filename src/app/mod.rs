// NameFinder - app/mod.rs
//
// Application layer: state, triggers, the interactive console, and the
// per-run orchestration used by the binary.
// Dependencies: core and platform layers.

pub mod console;
pub mod runner;
pub mod state;
