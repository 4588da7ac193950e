mod common;
use common::{config_dir, sqlshift_cmd};
use predicates::prelude::*;

const QUERY: &str = "SELECT a, b FROM t WHERE a = 1 ORDER BY b";

fn format(sql: &str) -> String {
    let output = sqlshift_cmd()
        .args(["format", "--sql", sql])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_format_is_multiline_with_four_spaces() {
    let out = format(QUERY);

    assert!(out.contains('\n'));
    assert!(!out.ends_with('\n'));
    assert!(out.lines().any(|line| line.starts_with("    ")));
    assert!(out.lines().all(|line| !line.starts_with("  ") || line.starts_with("    ")));
}

#[test]
fn test_format_is_idempotent() {
    let first = format(QUERY);
    let second = format(&first);
    assert_eq!(first, second);
}

#[test]
fn test_format_failure_names_formatting() {
    sqlshift_cmd()
        .args(["format", "--sql", "SELEC T 1"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: SQL formatting failed:"));
}

#[test]
fn test_format_empty_input() {
    sqlshift_cmd()
        .arg("format")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr("Error: No SQL provided\n");
}

#[test]
fn test_configured_pad() {
    let dir = config_dir("[format]\npad = 2\nindent = 2\n");

    let output = sqlshift_cmd()
        .current_dir(dir.path())
        .args(["format", "--sql", QUERY])
        .output()
        .unwrap();
    assert!(output.status.success());

    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.lines().any(|line| line.starts_with("  ") && !line.starts_with("   ")));
}

#[test]
fn test_multiline_literal_survives_formatting() {
    let first = format("SELECT 'a\n  b' AS note FROM t");
    assert!(first.contains("'a\n  b'"), "{}", first);

    let second = format(&first);
    assert_eq!(first, second);
}
