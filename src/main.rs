//! Command-line entry point for `archsetup`.
use std::sync::Arc;

use anyhow::Result;
use archsetup::cli::{Cli, Command};
use archsetup::commands;
use archsetup::logging::{self, Logger};
use clap::Parser;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args.subcommand();

    logging::init_subscriber(args.verbose, command.name());
    let log = Arc::new(Logger::new(command.name()));

    match command {
        Command::Setup(opts) => commands::setup::run(&args.global, &opts, &log),
        Command::Plan => commands::plan::run(&args.global, &log),
        Command::Version => {
            let version = option_env!("ARCHSETUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            log.info(&format!("archsetup {version}"));
            Ok(())
        }
    }
}
