//! Engine backed by the Python `sqlglot` package.
//!
//! Each call runs the interpreter with a small driver script and exchanges
//! one JSON document in each direction.

use crate::dialects::DialectRegistry;
use crate::engine::base::{Engine, GenerateOptions, TranspileError};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::process::{Command, Stdio};

/// Exit status the driver uses when `import sqlglot` fails
const IMPORT_FAILED: i32 = 3;

const DRIVER: &str = r#"
import json
import sys

try:
    import sqlglot
    from sqlglot import dialects
except ImportError:
    sys.exit(3)

request = json.load(sys.stdin)
if request["op"] == "probe":
    reply = {
        "version": getattr(sqlglot, "__version__", None),
        "dialects": {str(k): str(v) for k, v in dialects.MODULE_BY_DIALECT.items()},
    }
else:
    try:
        reply = {
            "statements": sqlglot.transpile(
                request["sql"],
                read=request["read"],
                write=request["write"],
                identify=request["identify"],
                pretty=request["pretty"],
                pad=request["pad"],
                indent=request["indent"],
            )
        }
    except Exception as e:
        reply = {"error": str(e)}
json.dump(reply, sys.stdout)
"#;

#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum Request<'a> {
    Probe,
    Transpile {
        sql: &'a str,
        read: Option<&'a str>,
        write: Option<&'a str>,
        identify: bool,
        pretty: bool,
        pad: usize,
        indent: usize,
    },
}

#[derive(Debug, Deserialize)]
struct ProbeReply {
    version: Option<String>,
    dialects: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct TranspileReply {
    #[serde(default)]
    statements: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

pub struct SqlglotEngine {
    python: String,
    version: Option<String>,
    registry: DialectRegistry,
}

impl SqlglotEngine {
    /// Start the interpreter once to check that sqlglot imports, and read
    /// its version and dialect table.
    pub fn load(python: &str) -> Result<Self, TranspileError> {
        debug!("Probing sqlglot with interpreter: {}", python);

        let probe: ProbeReply = call(python, &Request::Probe).map_err(|reason| {
            debug!("sqlglot probe failed: {}", reason);
            TranspileError::LibraryUnavailable
        })?;

        debug!(
            "sqlglot {} with {} dialects",
            probe.version.as_deref().unwrap_or("unknown"),
            probe.dialects.len()
        );

        Ok(Self {
            python: python.to_string(),
            version: probe.version,
            registry: probe.dialects.into_iter().collect(),
        })
    }
}

impl Engine for SqlglotEngine {
    fn name(&self) -> &str {
        "sqlglot"
    }

    fn version(&self) -> Option<String> {
        self.version.clone()
    }

    fn registry(&self) -> &DialectRegistry {
        &self.registry
    }

    fn generate(
        &self,
        sql: &str,
        read: Option<&str>,
        write: Option<&str>,
        options: GenerateOptions,
    ) -> Result<Vec<String>, String> {
        let request = Request::Transpile {
            sql,
            read,
            write,
            identify: options.identify,
            pretty: options.pretty,
            pad: options.pad,
            indent: options.indent,
        };

        let reply: TranspileReply = call(&self.python, &request)?;
        match (reply.statements, reply.error) {
            (_, Some(error)) => Err(error),
            (Some(statements), None) => Ok(statements),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// Run the driver with `request` on stdin and decode its stdout
fn call<T: DeserializeOwned>(python: &str, request: &Request<'_>) -> Result<T, String> {
    let payload = serde_json::to_vec(request).map_err(|e| e.to_string())?;

    let mut child = Command::new(python)
        .arg("-c")
        .arg(DRIVER)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("failed to start '{}': {}", python, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(&payload).map_err(|e| e.to_string())?;
    }

    let output = child.wait_with_output().map_err(|e| e.to_string())?;
    if output.status.code() == Some(IMPORT_FAILED) {
        return Err("sqlglot is not importable".to_string());
    }
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("driver exited with {}: {}", output.status, stderr.trim()));
    }

    serde_json::from_slice(&output.stdout).map_err(|e| format!("invalid driver reply: {}", e))
}
