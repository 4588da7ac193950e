//! SQL transpilation engines and the startup step that loads one.

pub mod base;
pub mod builtin;
pub mod format;
pub mod sqlglot;

pub use base::{Engine, GenerateOptions, TranspileError};
pub use builtin::BuiltinEngine;
pub use sqlglot::SqlglotEngine;

use crate::model::{EngineConfig, EngineKind};
use log::debug;

/// Load the configured engine together with its dialect registry
pub fn load(config: &EngineConfig) -> Result<Box<dyn Engine>, TranspileError> {
    let engine: Box<dyn Engine> = match config.kind {
        EngineKind::Builtin => Box::new(BuiltinEngine::new()),
        EngineKind::Sqlglot => Box::new(SqlglotEngine::load(&config.python)?),
    };

    debug!(
        "Loaded {} engine with {} dialects",
        engine.name(),
        engine.registry().len()
    );
    Ok(engine)
}
