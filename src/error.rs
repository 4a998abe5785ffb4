//! Domain-specific error types for archsetup.
//!
//! Internal modules return typed errors ([`ConfigError`], [`ExecError`]);
//! command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.
//!
//! ```text
//! SetupError
//! ├── Config(ConfigError)  — reading or parsing the overrides file
//! └── Exec(ExecError)      — starting or running a shell command
//! ```
//!
//! Command failures during provisioning are never fatal: the runner only
//! renders [`ExecError`] into a log line and a summary entry.

use thiserror::Error;

/// Top-level error type for archsetup.
///
/// Aggregates the domain errors and converts to [`anyhow::Error`] at the
/// command boundary.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Loading the overrides file failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A shell command could not be started or failed.
    #[error("Execution error: {0}")]
    Exec(#[from] ExecError),
}

/// Errors that arise while loading the TOML overrides file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or contains unknown keys.
    #[error("Invalid config file {path}: {source}")]
    Parse {
        /// Path to the offending file.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Errors that arise from running a shell command.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The shell process could not be started.
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        /// The command string that was being run.
        command: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The command ran but exited non-zero (or was killed by a signal).
    #[error("'{command}' exited with {}", exit_label(.code))]
    NonZeroExit {
        /// The command string that failed.
        command: String,
        /// Exit code, `None` when terminated by a signal.
        code: Option<i32>,
    },
}

#[allow(clippy::ref_option)]
fn exit_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| format!("code {c}"))
}
