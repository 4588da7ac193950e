/// A single SQL conversion, built from `transpile`/`format` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileRequest {
    pub sql: String,
    pub read: Option<String>,
    pub write: Option<String>,
    pub identify: bool,
    pub pretty: bool,
}

impl TranspileRequest {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            read: None,
            write: None,
            identify: false,
            pretty: false,
        }
    }

    pub fn read(mut self, dialect: Option<String>) -> Self {
        self.read = dialect;
        self
    }

    pub fn write(mut self, dialect: Option<String>) -> Self {
        self.write = dialect;
        self
    }

    pub fn identify(mut self, identify: bool) -> Self {
        self.identify = identify;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Name of the operation used in failure messages.
    pub fn operation(&self) -> &'static str {
        if self.pretty { "formatting" } else { "transpilation" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = TranspileRequest::new("SELECT 1");
        assert_eq!(request.sql, "SELECT 1");
        assert_eq!(request.read, None);
        assert_eq!(request.write, None);
        assert!(!request.identify);
        assert!(!request.pretty);
    }

    #[test]
    fn test_operation_name_follows_pretty() {
        let request = TranspileRequest::new("SELECT 1");
        assert_eq!(request.operation(), "transpilation");
        assert_eq!(request.pretty(true).operation(), "formatting");
    }
}
