// NameFinder - core/mod.rs
//
// Core business logic layer: dataset loading, search, result rendering.
// Must NOT depend on: app or platform.

pub mod dataset;
pub mod export;
pub mod model;
pub mod search;
