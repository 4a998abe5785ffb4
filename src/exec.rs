//! Shell command execution.
//!
//! Every provisioning step is a literal shell string handed to `sh -c`, the
//! same way a shell script would run it. The [`Executor`] trait is the seam
//! that tests replace with a recording or mocked implementation.
use std::fmt;
use std::process::{Command, ExitStatus, Output, Stdio};

use crate::error::ExecError;

/// Shell used to interpret every command string.
pub const SHELL: &str = "sh";

/// Result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Captured standard output (empty when output went to the terminal).
    pub stdout: String,
    /// Captured standard error (empty when output went to the terminal).
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl ExecResult {
    /// A successful result with the given stdout.
    #[must_use]
    pub fn ok(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            stderr: String::new(),
            success: true,
            code: Some(0),
        }
    }

    /// A failed result with the given exit code and no output.
    #[must_use]
    pub const fn failed(code: i32) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            success: false,
            code: Some(code),
        }
    }
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

impl From<ExitStatus> for ExecResult {
    fn from(status: ExitStatus) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Execution primitive for shell command strings.
///
/// Implementations never treat a non-zero exit as an error: they report it
/// through [`ExecResult::success`]. An `Err` means the shell itself could not
/// be started.
#[cfg_attr(test, mockall::automock)]
pub trait Executor: Send + Sync + fmt::Debug {
    /// Run `command` through the shell with the terminal attached.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Spawn`] if the shell cannot be started.
    fn run_shell(&self, command: &str) -> Result<ExecResult, ExecError>;

    /// Run `command` through the shell and capture its output.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Spawn`] if the shell cannot be started.
    fn capture_shell(&self, command: &str) -> Result<ExecResult, ExecError>;
}

/// [`Executor`] that spawns real processes via `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl SystemExecutor {
    fn shell(command: &str) -> Command {
        let mut cmd = Command::new(SHELL);
        cmd.arg("-c").arg(command);
        cmd
    }
}

impl Executor for SystemExecutor {
    fn run_shell(&self, command: &str) -> Result<ExecResult, ExecError> {
        let status = Self::shell(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ExecError::Spawn {
                command: command.to_string(),
                source,
            })?;
        Ok(ExecResult::from(status))
    }

    fn capture_shell(&self, command: &str) -> Result<ExecResult, ExecError> {
        let output = Self::shell(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExecError::Spawn {
                command: command.to_string(),
                source,
            })?;
        Ok(ExecResult::from(output))
    }
}
