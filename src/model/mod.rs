pub mod config;
pub mod request;

pub use config::{Config, ConfigError, EngineConfig, EngineKind, FormatConfig, LoggingConfig};
pub use request::TranspileRequest;
