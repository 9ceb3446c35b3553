// CohortQuery - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform or app, and never touches the filesystem.

pub mod export;
pub mod model;
pub mod parser;
pub mod query;
