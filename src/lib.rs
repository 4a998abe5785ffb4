//! Post-install provisioner for Arch Linux.
//!
//! Runs a fixed, ordered list of shell commands that turn a fresh install
//! into a developer desktop: system update, AUR helper, packages, zsh, the
//! zen kernel, NVIDIA drivers and dotfiles. Commands are best-effort; a
//! failure is logged and the run continues.
//!
//! Layers:
//!
//! - **[`exec`]**: the [`exec::Executor`] seam over `sh -c`
//! - **[`runner`]**: issues a [`batch::Batch`] in order, continuing past failures
//! - **[`kernel`]**: kernel module names and the commands that configure them
//! - **[`tasks`]**: the named provisioning steps
//! - **[`commands`]**: top-level subcommands (`setup`, `plan`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod kernel;
pub mod logging;
pub mod platform;
pub mod runner;
pub mod tasks;
