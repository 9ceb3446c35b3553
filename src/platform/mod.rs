// CohortQuery - platform/mod.rs
//
// Platform abstraction layer: filesystem reads and config directories.
// Must NOT depend on: core query logic or app.

pub mod config;
pub mod fs;
