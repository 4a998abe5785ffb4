// Shared helpers for integration tests.
//
// Provides a recording executor and an in-memory log so each integration
// test can drive the real task list without touching the host system.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use archsetup::config::Config;
use archsetup::error::ExecError;
use archsetup::exec::{ExecResult, Executor};
use archsetup::logging::{Log, TaskEntry, TaskStatus};
use archsetup::tasks::Context;

/// Executor that records every command and returns canned results.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    issued: Mutex<Vec<String>>,
    failing: Vec<String>,
    lsmod: String,
}

impl RecordingExecutor {
    /// Recorder whose `lsmod` capture prints `output`.
    pub fn with_lsmod(output: &str) -> Self {
        Self {
            lsmod: output.to_string(),
            ..Self::default()
        }
    }

    /// Make `command` exit with status 1.
    pub fn failing(mut self, command: &str) -> Self {
        self.failing.push(command.to_string());
        self
    }

    /// Commands issued through `run_shell`, in order.
    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().expect("issued lock").clone()
    }
}

impl Executor for RecordingExecutor {
    fn run_shell(&self, command: &str) -> Result<ExecResult, ExecError> {
        self.issued
            .lock()
            .expect("issued lock")
            .push(command.to_string());
        if self.failing.iter().any(|f| f == command) {
            Ok(ExecResult::failed(1))
        } else {
            Ok(ExecResult::ok(""))
        }
    }

    fn capture_shell(&self, _command: &str) -> Result<ExecResult, ExecError> {
        Ok(ExecResult::ok(&self.lsmod))
    }
}

/// Log that keeps task records and warnings, and drops everything else.
#[derive(Debug, Default)]
pub struct MemoryLog {
    warnings: Mutex<Vec<String>>,
    dry_runs: Mutex<Vec<String>>,
    tasks: Mutex<Vec<TaskEntry>>,
}

impl MemoryLog {
    /// Warning messages, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().expect("warnings lock").clone()
    }

    /// Dry-run messages, in order.
    pub fn dry_runs(&self) -> Vec<String> {
        self.dry_runs.lock().expect("dry_runs lock").clone()
    }

    /// Recorded task entries, in order.
    pub fn entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().expect("tasks lock").clone()
    }
}

impl Log for MemoryLog {
    fn stage(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, msg: &str) {
        self.warnings
            .lock()
            .expect("warnings lock")
            .push(msg.to_string());
    }
    fn error(&self, _msg: &str) {}
    fn dry_run(&self, msg: &str) {
        self.dry_runs
            .lock()
            .expect("dry_runs lock")
            .push(msg.to_string());
    }
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.tasks.lock().expect("tasks lock").push(TaskEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }
}

/// Build a context over default config with the given executor and log.
pub fn context(executor: &Arc<RecordingExecutor>, log: &Arc<MemoryLog>, dry_run: bool) -> Context {
    Context::new(
        Config::default(),
        Arc::clone(executor) as Arc<dyn Executor>,
        Arc::clone(log) as Arc<dyn Log>,
        dry_run,
    )
}
