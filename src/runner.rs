//! Best-effort sequential execution of command batches.
//!
//! Each command runs to completion before the next is issued. A failing
//! command is logged and recorded, never fatal: the rest of the batch (and
//! every later batch) still runs.
use crate::batch::Batch;
use crate::error::ExecError;
use crate::exec::Executor;
use crate::logging::Log;

/// A command that exited non-zero or could not be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// The command string as issued.
    pub command: String,
    /// Rendered reason (exit code or spawn error).
    pub reason: String,
}

/// Outcome of running one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Commands handed to the executor (or previewed in dry-run mode).
    pub issued: usize,
    /// Commands that failed, in execution order.
    pub failures: Vec<CommandFailure>,
}

impl BatchReport {
    /// Whether every issued command succeeded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs batches through an injected [`Executor`], continuing past failures.
#[derive(Clone, Copy)]
pub struct Runner<'a> {
    executor: &'a dyn Executor,
    log: &'a dyn Log,
    dry_run: bool,
}

impl std::fmt::Debug for Runner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("executor", &self.executor)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl<'a> Runner<'a> {
    /// Create a runner. With `dry_run` set, commands are only logged.
    #[must_use]
    pub const fn new(executor: &'a dyn Executor, log: &'a dyn Log, dry_run: bool) -> Self {
        Self {
            executor,
            log,
            dry_run,
        }
    }

    /// Issue every command of `batch` in order.
    pub fn run(&self, batch: &Batch) -> BatchReport {
        let mut report = BatchReport::default();

        for command in batch {
            report.issued += 1;

            if self.dry_run {
                self.log.dry_run(command);
                continue;
            }

            self.log.debug(&format!("$ {command}"));
            if let Err(err) = self.issue(command) {
                self.log.warn(&format!("{err} (continuing)"));
                report.failures.push(CommandFailure {
                    command: command.clone(),
                    reason: err.to_string(),
                });
            }
        }

        self.log.debug(&format!(
            "{}: {} issued, {} failed",
            batch.label(),
            report.issued,
            report.failures.len()
        ));
        report
    }

    fn issue(&self, command: &str) -> Result<(), ExecError> {
        let result = self.executor.run_shell(command)?;
        if result.success {
            Ok(())
        } else {
            Err(ExecError::NonZeroExit {
                command: command.to_string(),
                code: result.code,
            })
        }
    }
}
