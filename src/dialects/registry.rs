use crate::engine::TranspileError;
use log::debug;
use std::collections::BTreeMap;

/// Immutable mapping from a dialect name to the engine's handle for it.
///
/// Names are case-sensitive. Several names may share one handle
/// (`postgres` and `postgresql`, for instance).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialectRegistry {
    dialects: BTreeMap<String, String>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, resolving to `handle`
    pub fn register(&mut self, name: impl Into<String>, handle: impl Into<String>) {
        let name = name.into();
        let handle = handle.into();
        debug!("Registering dialect: {} -> {}", name, handle);
        self.dialects.insert(name, handle);
    }

    /// Resolve a dialect name to its engine handle
    pub fn resolve(&self, name: &str) -> Result<&str, TranspileError> {
        self.dialects
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| TranspileError::UnknownDialect(name.to_string()))
    }

    /// Resolve an optional dialect name. `None` stays `None`, meaning the
    /// engine default.
    pub fn resolve_opt(&self, name: Option<&str>) -> Result<Option<&str>, TranspileError> {
        name.map(|n| self.resolve(n)).transpose()
    }

    /// All registered names, sorted ascending
    pub fn names(&self) -> Vec<String> {
        self.dialects.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}

impl<N: Into<String>, H: Into<String>> FromIterator<(N, H)> for DialectRegistry {
    fn from_iter<I: IntoIterator<Item = (N, H)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, handle) in iter {
            registry.register(name, handle);
        }
        registry
    }
}
