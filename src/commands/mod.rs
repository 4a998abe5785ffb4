//! Top-level subcommand orchestration.
pub mod plan;
pub mod setup;

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::SetupError;
use crate::logging::Log;
use crate::platform::Platform;

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Detected host information.
    pub platform: Platform,
    /// Loaded overrides.
    pub config: Config,
}

impl CommandSetup {
    /// Detect the platform and load the overrides file.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Config`] if the config file exists but cannot be
    /// read or parsed.
    pub fn init(global: &GlobalOpts, log: &dyn Log) -> Result<Self, SetupError> {
        let platform = Platform::detect();
        for warning in platform.warnings() {
            log.warn(&warning);
        }

        log.stage("Loading configuration");
        let config = match config::resolve_path(global.config.as_deref()) {
            Some(path) => {
                log.debug(&format!("config file: {}", path.display()));
                Config::load(&path)?
            }
            None => {
                log.debug("no config location available, using defaults");
                Config::default()
            }
        };

        log.info(&format!(
            "initramfs modules: {}",
            crate::kernel::format_module_list(&config.kernel_modules)
        ));
        log.debug(&format!("mkinitcpio.conf: {}", config.mkinitcpio_conf.display()));
        log.debug(&format!("modprobe.d: {}", config.modprobe_dir.display()));

        Ok(Self { platform, config })
    }
}
