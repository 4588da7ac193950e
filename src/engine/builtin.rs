//! Engine backed by the `sqlparser` crate.
//!
//! Parsing is dialect aware, while rendering is shared between dialects. The
//! write dialect therefore only affects identifier quoting.

use crate::dialects::DialectRegistry;
use crate::engine::base::{Engine, GenerateOptions};
use crate::engine::format::reindent;
use log::debug;
use sqlparser::ast::{
    Expr, Ident, ObjectName, ObjectNamePart, Query, SelectItem, SetExpr, Statement, TableFactor,
    VisitMut, VisitorMut,
};
use sqlparser::dialect::{dialect_from_str, Dialect, GenericDialect};
use sqlparser::parser::Parser;
use std::ops::ControlFlow;

/// `sqlparser` release this engine is built against. Cargo.toml pins the
/// exact same version.
pub const SQLPARSER_VERSION: &str = "0.60.0";

/// Accepted names and the `sqlparser` dialect each resolves to
const DIALECT_NAMES: &[(&str, &str)] = &[
    ("ansi", "ansi"),
    ("bigquery", "bigquery"),
    ("clickhouse", "clickhouse"),
    ("databricks", "databricks"),
    ("duckdb", "duckdb"),
    ("generic", "generic"),
    ("hive", "hive"),
    ("mssql", "mssql"),
    ("mysql", "mysql"),
    ("oracle", "oracle"),
    ("postgres", "postgresql"),
    ("postgresql", "postgresql"),
    ("redshift", "redshift"),
    ("snowflake", "snowflake"),
    ("sqlite", "sqlite"),
    ("tsql", "mssql"),
];

/// Used by `identify` when no write dialect names its own quote character
const DEFAULT_QUOTE: char = '"';

pub struct BuiltinEngine {
    registry: DialectRegistry,
}

impl BuiltinEngine {
    pub fn new() -> Self {
        let registry = DIALECT_NAMES
            .iter()
            .filter(|(name, handle)| {
                let known = dialect_from_str(handle).is_some();
                if !known {
                    debug!("sqlparser {} has no '{}' dialect, skipping", SQLPARSER_VERSION, name);
                }
                known
            })
            .map(|&(name, handle)| (name, handle))
            .collect();

        Self { registry }
    }
}

impl Default for BuiltinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for BuiltinEngine {
    fn name(&self) -> &str {
        "sqlparser"
    }

    fn version(&self) -> Option<String> {
        Some(SQLPARSER_VERSION.to_string())
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
        let read_dialect = dialect(read)?;
        let mut statements =
            Parser::parse_sql(read_dialect.as_ref(), sql).map_err(|e| e.to_string())?;

        let quote = match write {
            Some(handle) => Some(quote_char(dialect(Some(handle))?.as_ref())),
            None if options.identify => Some(DEFAULT_QUOTE),
            None => None,
        };
        if let Some(quote) = quote {
            requote(&mut statements, quote, options.identify);
        }

        Ok(statements
            .iter()
            .map(|statement| render(statement, options))
            .collect())
    }
}

fn dialect(handle: Option<&str>) -> Result<Box<dyn Dialect>, String> {
    match handle {
        None => Ok(Box::new(GenericDialect {})),
        Some(handle) => {
            dialect_from_str(handle).ok_or_else(|| format!("unsupported dialect '{}'", handle))
        }
    }
}

fn quote_char(dialect: &dyn Dialect) -> char {
    dialect
        .identifier_quote_style("identifier")
        .unwrap_or(DEFAULT_QUOTE)
}

/// Re-quote identifiers with `quote`. Unquoted identifiers are only quoted
/// when `identify` is set.
fn requote(statements: &mut Vec<Statement>, quote: char, identify: bool) {
    let _ = statements.visit(&mut Requote { quote, identify });
}

/// Visits every identifier position: column references, relation names,
/// projection aliases and table aliases.
struct Requote {
    quote: char,
    identify: bool,
}

impl Requote {
    fn ident(&self, ident: &mut Ident) {
        restyle(ident, self.quote, self.identify);
    }

    fn projection_aliases(&self, body: &mut SetExpr) {
        match body {
            SetExpr::Select(select) => {
                for item in select.projection.iter_mut() {
                    if let SelectItem::ExprWithAlias { alias, .. } = item {
                        self.ident(alias);
                    }
                }
            }
            SetExpr::SetOperation { left, right, .. } => {
                self.projection_aliases(left);
                self.projection_aliases(right);
            }
            _ => {}
        }
    }
}

impl VisitorMut for Requote {
    type Break = ();

    fn pre_visit_expr(&mut self, expr: &mut Expr) -> ControlFlow<()> {
        match expr {
            Expr::Identifier(ident) => self.ident(ident),
            Expr::CompoundIdentifier(idents) => {
                for ident in idents.iter_mut() {
                    self.ident(ident);
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_relation(&mut self, relation: &mut ObjectName) -> ControlFlow<()> {
        for part in relation.0.iter_mut() {
            if let ObjectNamePart::Identifier(ident) = part {
                self.ident(ident);
            }
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_table_factor(&mut self, table_factor: &mut TableFactor) -> ControlFlow<()> {
        let alias = match table_factor {
            TableFactor::Table { alias, .. } | TableFactor::Derived { alias, .. } => alias,
            _ => return ControlFlow::Continue(()),
        };
        if let Some(alias) = alias {
            self.ident(&mut alias.name);
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_query(&mut self, query: &mut Query) -> ControlFlow<()> {
        self.projection_aliases(&mut query.body);
        ControlFlow::Continue(())
    }
}

fn restyle(ident: &mut Ident, quote: char, identify: bool) {
    if ident.quote_style.is_some() || identify {
        ident.quote_style = Some(quote);
    }
}

fn render(statement: &Statement, options: GenerateOptions) -> String {
    if options.pretty {
        reindent(&format!("{statement:#}"), options.pad, options.indent)
    } else {
        statement.to_string()
    }
}
