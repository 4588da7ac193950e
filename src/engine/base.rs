use crate::dialects::DialectRegistry;
use crate::model::{ConfigError, FormatConfig, TranspileRequest};
use log::debug;

/// Everything an engine needs besides the SQL and the dialect handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub identify: bool,
    pub pretty: bool,
    pub pad: usize,
    pub indent: usize,
}

/// A SQL transpilation engine
pub trait Engine {
    /// Short engine name used in logs
    fn name(&self) -> &str;

    /// Version reported by the engine, if it reports one
    fn version(&self) -> Option<String>;

    /// Dialects the engine understands
    fn registry(&self) -> &DialectRegistry;

    /// Convert `sql` and return every output statement.
    ///
    /// `read` and `write` are registry handles, `None` meaning the engine's
    /// default dialect. The error is the engine's own message.
    fn generate(
        &self,
        sql: &str,
        read: Option<&str>,
        write: Option<&str>,
        options: GenerateOptions,
    ) -> Result<Vec<String>, String>;

    /// Resolve the request's dialects, run the engine and keep the first
    /// output statement.
    fn transpile(
        &self,
        request: &TranspileRequest,
        format: &FormatConfig,
    ) -> Result<String, TranspileError> {
        let registry = self.registry();
        let read = registry.resolve_opt(request.read.as_deref())?;
        let write = registry.resolve_opt(request.write.as_deref())?;

        debug!(
            "{} {}: read={:?} write={:?} identify={} pad={} indent={}",
            self.name(),
            request.operation(),
            read,
            write,
            request.identify,
            format.pad,
            format.indent
        );

        let options = GenerateOptions {
            identify: request.identify,
            pretty: request.pretty,
            pad: format.pad,
            indent: format.indent,
        };

        let statements = self
            .generate(&request.sql, read, write, options)
            .map_err(|message| TranspileError::OperationFailed {
                operation: request.operation(),
                message,
            })?;

        debug!("{} produced {} statement(s)", self.name(), statements.len());
        statements.into_iter().next().ok_or(TranspileError::EmptyResult)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranspileError {
    #[error("sqlglot package not installed. Run: python -m pip install sqlglot")]
    LibraryUnavailable,

    #[error("No SQL provided")]
    NoInputProvided,

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("No result from transpilation")]
    EmptyResult,

    #[error("SQL {operation} failed: {message}")]
    OperationFailed {
        operation: &'static str,
        message: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Unhandled(String),
}

impl From<std::io::Error> for TranspileError {
    fn from(err: std::io::Error) -> Self {
        TranspileError::Unhandled(err.to_string())
    }
}

impl From<serde_json::Error> for TranspileError {
    fn from(err: serde_json::Error) -> Self {
        TranspileError::Unhandled(err.to_string())
    }
}
