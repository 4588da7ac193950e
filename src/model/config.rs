use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "SQLSHIFT_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// `sqlparser`, linked into the binary
    #[default]
    Builtin,
    /// Python `sqlglot`, driven through a subprocess
    Sqlglot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub kind: EngineKind,

    #[serde(default = "default_python")]
    pub python: String,
}

/// Indentation used by pretty output. `pad` applies to the first nesting
/// level under a clause keyword, `indent` to every level after that.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatConfig {
    #[serde(default = "default_pad")]
    pub pad: usize,

    #[serde(default = "default_indent")]
    pub indent: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_python() -> String {
    "python3".to_string()
}
fn default_pad() -> usize {
    4
}
fn default_indent() -> usize {
    4
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kind: EngineKind::default(),
            python: default_python(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            pad: default_pad(),
            indent: default_indent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration relative to the working directory
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_in(config_path, Path::new("."))
    }

    /// Load configuration, searching the standard file names inside `dir`
    /// when no explicit path is given. The first file found wins.
    pub fn load_in(config_path: Option<&str>, dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            debug!("Loading config from {}: {}", CONFIG_ENV_VAR, path);
            config = Self::load_from_file(Path::new(path))?;
        } else {
            for standard_path in Self::standard_config_paths(dir) {
                if standard_path.exists() {
                    debug!("Loading config from: {}", standard_path.display());
                    config = Self::load_from_file(&standard_path)?;
                    break;
                }
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::FileRead(display.clone(), e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(display, e.to_string()))
    }

    fn standard_config_paths(dir: &Path) -> Vec<PathBuf> {
        vec![dir.join("sqlshift.toml"), dir.join(".sqlshift.toml")]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(String, String),
}
