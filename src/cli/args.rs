use clap::{Args, Parser, Subcommand};

/// CLI entry point for sqlshift
#[derive(Parser, Debug)]
#[command(
    name = "sqlshift",
    about = "SQL dialect transpiler and formatter for editor integrations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Transpile SQL between dialects
    Transpile(SqlArgs),

    /// Format/pretty-print SQL
    Format(SqlArgs),

    /// Show the transpiler engine version
    Version,

    /// List supported dialects
    Dialects,
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct SqlArgs {
    /// Read dialect (optional)
    #[arg(long)]
    pub read: Option<String>,

    /// Write dialect (optional)
    #[arg(long)]
    pub write: Option<String>,

    /// Quote every identifier in the write dialect's style
    #[arg(long)]
    pub identify: bool,

    /// SQL text (if not provided, reads from stdin)
    #[arg(long, allow_hyphen_values = true)]
    pub sql: Option<String>,
}
