//! Named provisioning steps, each producing one batch of shell commands.
pub mod dotfiles;
pub mod kernel;
pub mod nvidia;
pub mod packages;
pub mod shell;
pub mod system;

mod context;

pub use context::Context;

use crate::batch::Batch;
use crate::logging::TaskStatus;
use crate::runner::Runner;

/// A named provisioning step.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &'static str;

    /// Whether the task's precondition holds right now.
    ///
    /// Evaluated immediately before the task runs, after every earlier task
    /// has finished. The default is unconditional.
    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    /// Describes the precondition checked by [`Task::should_run`], if any.
    fn condition(&self) -> Option<&'static str> {
        None
    }

    /// The commands this task issues, in order.
    fn batch(&self, ctx: &Context) -> Batch;
}

/// Every setup task, in execution order.
#[must_use]
pub fn all_setup_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(system::UpdateSystem),
        Box::new(system::RemoveUnusedPackages),
        Box::new(packages::InstallParu),
        Box::new(packages::InstallPackages),
        Box::new(shell::ConfigureZsh),
        Box::new(kernel::InstallZenKernel),
        Box::new(nvidia::InstallNvidiaDrivers),
        Box::new(kernel::BlacklistNouveau),
        Box::new(kernel::ConfigureInitramfsModules),
        Box::new(nvidia::ConfigureNvidiaDrm),
        Box::new(dotfiles::InstallDotfiles),
    ]
}

/// Execute a task, recording the result in the logger.
///
/// Command failures are reported, never propagated.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (condition not met)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, task.condition());
        return;
    }

    ctx.log.stage(task.name());

    let batch = task.batch(ctx);
    let report = Runner::new(&*ctx.executor, &*ctx.log, ctx.dry_run).run(&batch);

    if ctx.dry_run {
        ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
    } else if report.is_clean() {
        ctx.log.record_task(task.name(), TaskStatus::Ok, None);
    } else {
        let message = format!(
            "{} of {} commands failed",
            report.failures.len(),
            report.issued
        );
        ctx.log
            .record_task(task.name(), TaskStatus::Failed, Some(&message));
    }
}
