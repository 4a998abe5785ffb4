//! The `plan` command: list tasks and their commands without running them.
use std::sync::Arc;

use anyhow::Result;

use super::CommandSetup;
use crate::cli::GlobalOpts;
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger};
use crate::tasks::{self, Context, Task};

/// Print every task and the commands it would issue, without running any.
///
/// Conditional tasks are listed with their condition; the condition itself
/// is not evaluated.
///
/// # Errors
///
/// Returns an error if configuration loading fails.
pub fn run(global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let setup = CommandSetup::init(global, log.as_ref())?;
    // Only `batch()` is called below; the executor is never invoked.
    let ctx = Context::new(
        setup.config,
        Arc::new(SystemExecutor),
        Arc::clone(log) as Arc<dyn Log>,
        true,
    );

    for task in &tasks::all_setup_tasks() {
        log.stage(&heading(task.as_ref()));
        for command in task.batch(&ctx).iter() {
            log.info(command);
        }
    }
    Ok(())
}

/// Stage heading for `task`, with its run condition when it has one.
fn heading(task: &dyn Task) -> String {
    match task.condition() {
        Some(cond) => format!("{} ({cond})", task.name()),
        None => task.name().to_string(),
    }
}
