//! The `setup` command: run the provisioning tasks.
use std::sync::Arc;

use anyhow::Result;

use super::CommandSetup;
use crate::cli::{GlobalOpts, SetupOpts};
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger};
use crate::tasks::{self, Context, Task};

/// Run the setup command.
///
/// Every selected task runs regardless of earlier command failures; failures
/// only show up in the log and the summary.
///
/// # Errors
///
/// Returns an error only if configuration loading fails.
pub fn run(global: &GlobalOpts, opts: &SetupOpts, log: &Arc<Logger>) -> Result<()> {
    let version = option_env!("ARCHSETUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("archsetup {version}"));

    let setup = CommandSetup::init(global, log.as_ref())?;
    log.debug(&format!("{:?}", setup.platform));

    let ctx = Context::new(
        setup.config,
        Arc::new(SystemExecutor),
        Arc::clone(log) as Arc<dyn Log>,
        global.dry_run,
    );

    let all_tasks = tasks::all_setup_tasks();
    run_tasks(select_tasks(&all_tasks, opts), &ctx);

    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        log.warn(&format!(
            "{count} task(s) had failing commands; later tasks ran anyway"
        ));
    }
    Ok(())
}

/// Apply `--only` and `--skip` to the task list, preserving order.
///
/// Matching is a case-insensitive substring test against the task name.
/// `--only` takes precedence when both are given.
#[must_use]
pub fn select_tasks<'a>(all_tasks: &'a [Box<dyn Task>], opts: &SetupOpts) -> Vec<&'a dyn Task> {
    all_tasks
        .iter()
        .filter(|t| {
            let name = t.name().to_lowercase();
            if !opts.only.is_empty() {
                return opts.only.iter().any(|o| name.contains(&o.to_lowercase()));
            }
            if !opts.skip.is_empty() {
                return !opts.skip.iter().any(|s| name.contains(&s.to_lowercase()));
            }
            true
        })
        .map(AsRef::as_ref)
        .collect()
}

/// Execute tasks strictly in order.
pub fn run_tasks<'a>(tasks: impl IntoIterator<Item = &'a dyn Task>, ctx: &Context) {
    for task in tasks {
        tasks::execute(task, ctx);
    }
}
