use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::env;
use std::io::Write;

/// Log to stderr so stdout only ever carries the command's payload.
/// `RUST_LOG`, when set, overrides the configured level.
pub fn setup_logger(level: &str) {
    let filter = parse_level(level);

    let mut builder = Builder::new();
    builder.filter(None, filter);
    builder.target(Target::Stderr);

    builder.format(|buf, record| {
        let prefix = match record.level() {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        writeln!(buf, "sqlshift {}: {}", prefix, record.args())
    });

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    }

    builder.init();
}

/// Unknown level names fall back to `warn`
fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}
