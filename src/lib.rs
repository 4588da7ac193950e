//! Command-line adapter that exposes SQL dialect transpilation and
//! pretty-printing to editor integrations.

pub mod cli;
pub mod dialects;
pub mod engine;
pub mod logger;
pub mod model;
