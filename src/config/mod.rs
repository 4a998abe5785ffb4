//! Optional TOML overrides for the generated commands.
//!
//! Without a config file every field takes its default and the plan matches
//! the stock workstation setup exactly.
pub mod toml_loader;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::kernel::{DEFAULT_INITRAMFS_MODULES, KernelModule};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "ARCHSETUP_CONFIG";

/// Settings that feed the kernel-related commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Modules written into the initramfs `MODULES=()` array, in order.
    pub kernel_modules: Vec<KernelModule>,
    /// Path to the initramfs generator configuration.
    pub mkinitcpio_conf: PathBuf,
    /// Directory receiving modprobe `.conf` files.
    pub modprobe_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kernel_modules: DEFAULT_INITRAMFS_MODULES.to_vec(),
            mkinitcpio_conf: PathBuf::from("/etc/mkinitcpio.conf"),
            modprobe_dir: PathBuf::from("/etc/modprobe.d"),
        }
    }
}

impl Config {
    /// Load overrides from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or contains unknown keys or module names.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        toml_loader::load_config(path)
    }
}

/// Resolve the config file location.
///
/// Order: explicit `--config`, then `$ARCHSETUP_CONFIG`, then
/// `$XDG_CONFIG_HOME/archsetup/config.toml` (default `~/.config/...`).
/// Returns `None` when no candidate can be formed.
#[must_use]
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .ok()?;
    Some(config_home.join("archsetup").join("config.toml"))
}
