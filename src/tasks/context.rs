//! Shared state handed to every task.
use std::sync::Arc;

use crate::config::Config;
use crate::exec::Executor;
use crate::logging::Log;

/// Shared context for task execution.
pub struct Context {
    /// Loaded overrides (defaults when no config file exists).
    pub config: Config,
    /// Command executor (recording in tests, real shell otherwise).
    pub executor: Arc<dyn Executor>,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Print commands instead of running them.
    pub dry_run: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("executor", &self.executor)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Context {
    /// Creates a new context for task execution.
    #[must_use]
    pub fn new(
        config: Config,
        executor: Arc<dyn Executor>,
        log: Arc<dyn Log>,
        dry_run: bool,
    ) -> Self {
        Self {
            config,
            executor,
            log,
            dry_run,
        }
    }
}
