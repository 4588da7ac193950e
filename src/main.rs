use clap::{CommandFactory, Parser};
use sqlshift::cli::args::Cli;
use sqlshift::cli::dispatch::handle;
use sqlshift::engine::{self, TranspileError};
use sqlshift::logger::setup_logger;
use sqlshift::model::config::{Config, CONFIG_ENV_VAR};
use std::{env, io, process};

fn main() {
    let config_path = env::var(CONFIG_ENV_VAR).ok();
    let config = Config::load(config_path.as_deref()).unwrap_or_else(|e| fail(e.into()));
    setup_logger(&config.logging.level);

    // The engine is loaded before arguments are parsed so a missing engine
    // fails every invocation the same way.
    let engine = engine::load(&config.engine).unwrap_or_else(|e| fail(e));

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        process::exit(1);
    };

    if let Err(e) = handle(
        command,
        engine.as_ref(),
        &config.format,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    ) {
        fail(e);
    }
}

fn fail(err: TranspileError) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}
