//! Dialect names accepted on the command line and the engine handles they
//! resolve to.

pub mod registry;

pub use registry::DialectRegistry;
