use crate::cli::args::{Commands, SqlArgs};
use crate::engine::{Engine, TranspileError};
use crate::model::{FormatConfig, TranspileRequest};
use log::{debug, info};
use std::io::{Read, Write};

/// Run one subcommand, writing its payload to `stdout`
pub fn handle<R: Read, W: Write>(
    command: Commands,
    engine: &dyn Engine,
    format: &FormatConfig,
    stdin: R,
    stdout: &mut W,
) -> Result<(), TranspileError> {
    match command {
        Commands::Version => {
            info!("Running VERSION command");
            let version = engine.version().unwrap_or_else(|| "unknown".to_string());
            writeln!(stdout, "{}", version)?;
        }

        Commands::Dialects => {
            info!("Running DIALECTS command");
            let names = engine.registry().names();
            writeln!(stdout, "{}", serde_json::to_string_pretty(&names)?)?;
        }

        Commands::Transpile(args) => {
            info!("Running TRANSPILE command");
            run_transpile(args, false, engine, format, stdin, stdout)?;
        }

        Commands::Format(args) => {
            info!("Running FORMAT command");
            run_transpile(args, true, engine, format, stdin, stdout)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn run_transpile<R: Read, W: Write>(
    args: SqlArgs,
    pretty: bool,
    engine: &dyn Engine,
    format: &FormatConfig,
    stdin: R,
    stdout: &mut W,
) -> Result<(), TranspileError> {
    let sql = resolve_sql(args.sql, stdin)?;
    let request = TranspileRequest::new(sql)
        .read(args.read)
        .write(args.write)
        .identify(args.identify)
        .pretty(pretty);

    let result = engine.transpile(&request, format)?;
    write!(stdout, "{}", result)?;
    Ok(())
}

/// Use `--sql` verbatim when given, otherwise all of stdin. Blank input is
/// rejected either way.
pub fn resolve_sql<R: Read>(sql: Option<String>, mut stdin: R) -> Result<String, TranspileError> {
    let sql = match sql {
        Some(sql) => sql,
        None => {
            debug!("No --sql given, reading stdin");
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    if sql.trim().is_empty() {
        return Err(TranspileError::NoInputProvided);
    }
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BuiltinEngine;
    use std::io::{empty, Cursor};

    fn run(command: Commands, stdin: &str) -> Result<String, TranspileError> {
        let engine = BuiltinEngine::new();
        let mut out = Vec::new();
        handle(
            command,
            &engine,
            &FormatConfig::default(),
            Cursor::new(stdin.to_string()),
            &mut out,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn sql(text: &str) -> SqlArgs {
        SqlArgs {
            sql: Some(text.to_string()),
            ..SqlArgs::default()
        }
    }

    #[test]
    fn test_sql_flag_wins_over_stdin() {
        let resolved = resolve_sql(Some("SELECT 1".into()), Cursor::new("SELECT 2")).unwrap();
        assert_eq!(resolved, "SELECT 1");
    }

    #[test]
    fn test_stdin_used_without_flag() {
        let resolved = resolve_sql(None, Cursor::new("SELECT 2\n")).unwrap();
        assert_eq!(resolved, "SELECT 2\n");
    }

    #[test]
    fn test_blank_flag_does_not_fall_back_to_stdin() {
        let err = resolve_sql(Some("   ".into()), Cursor::new("SELECT 2")).unwrap_err();
        assert!(matches!(err, TranspileError::NoInputProvided));
    }

    #[test]
    fn test_empty_stdin_is_no_input() {
        let err = resolve_sql(None, empty()).unwrap_err();
        assert!(matches!(err, TranspileError::NoInputProvided));
        assert_eq!(err.to_string(), "No SQL provided");
    }

    #[test]
    fn test_version_prints_line() {
        let out = run(Commands::Version, "").unwrap();
        assert!(out.ends_with('\n'));
        assert!(!out.trim().is_empty());
    }

    #[test]
    fn test_dialects_is_sorted_json() {
        let out = run(Commands::Dialects, "").unwrap();
        let names: Vec<String> = serde_json::from_str(&out).unwrap();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(out.starts_with("[\n  \""));
    }

    #[test]
    fn test_transpile_has_no_trailing_newline() {
        let out = run(Commands::Transpile(sql("select 1")), "").unwrap();
        assert_eq!(out, "SELECT 1");
    }

    #[test]
    fn test_transpile_reads_stdin() {
        let out = run(Commands::Transpile(SqlArgs::default()), "select 2").unwrap();
        assert_eq!(out, "SELECT 2");
    }

    #[test]
    fn test_transpile_unknown_dialect() {
        let args = SqlArgs {
            read: Some("notarealdialect".into()),
            ..sql("SELECT 1")
        };
        let err = run(Commands::Transpile(args), "").unwrap_err();
        assert!(matches!(err, TranspileError::UnknownDialect(_)));
    }

    #[test]
    fn test_transpile_parse_failure() {
        let err = run(Commands::Transpile(sql("SELEC T 1")), "").unwrap_err();
        assert!(matches!(err, TranspileError::OperationFailed { operation: "transpilation", .. }));
        assert!(err.to_string().starts_with("SQL transpilation failed: "));
    }

    #[test]
    fn test_format_parse_failure_names_formatting() {
        let err = run(Commands::Format(sql("SELEC T 1")), "").unwrap_err();
        assert!(err.to_string().starts_with("SQL formatting failed: "));
    }

    #[test]
    fn test_format_is_multiline() {
        let out = run(Commands::Format(sql("SELECT a, b FROM t")), "").unwrap();
        assert!(out.contains('\n'));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_comment_only_is_empty_result() {
        let err = run(Commands::Transpile(sql("-- just a comment")), "").unwrap_err();
        assert!(matches!(err, TranspileError::EmptyResult));
    }
}
