// CohortQuery - app/mod.rs
//
// Application layer: file-path entry points that load a roster and run
// one query against it.
// Dependencies: core and platform layers.

pub mod roster_file;
