//! Command-line interface definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the post-install provisioner.
#[derive(Parser, Debug)]
#[command(
    name = "archsetup",
    about = "Provision a fresh Arch Linux install with a fixed developer desktop",
    version
)]
pub struct Cli {
    /// Subcommand to run; `setup` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

impl Cli {
    /// Resolved subcommand, defaulting to `setup` with no filters.
    #[must_use]
    pub fn subcommand(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Setup(SetupOpts::default()))
    }
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Log commands instead of running them
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Path to a TOML overrides file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the provisioning tasks
    Setup(SetupOpts),
    /// List every task and the commands it would issue
    Plan,
    /// Print version information
    Version,
}

impl Command {
    /// Short name used for the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Setup(_) => "setup",
            Self::Plan => "plan",
            Self::Version => "version",
        }
    }
}

/// Options for the `setup` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct SetupOpts {
    /// Skip tasks whose name contains any of these
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only tasks whose name contains any of these
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}
