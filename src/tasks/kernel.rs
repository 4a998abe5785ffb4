//! Kernel install and kernel module configuration tasks.
use super::packages::pacman_install;
use super::{Context, Task};
use crate::batch::Batch;
use crate::kernel::{
    LSMOD_COMMAND, NOUVEAU, blacklist_command, is_module_loaded, mkinitcpio_modules_command,
};

/// Install the zen kernel and regenerate the GRUB menu.
#[derive(Debug)]
pub struct InstallZenKernel;

impl Task for InstallZenKernel {
    fn name(&self) -> &'static str {
        "Install zen kernel"
    }

    fn batch(&self, _ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [
                pacman_install(&["linux-zen", "linux-zen-headers"]),
                "paru -S --needed --noconfirm update-grub".to_string(),
                "sudo update-grub".to_string(),
            ],
        )
    }
}

/// Keep nouveau from loading at boot, if it is loaded right now.
#[derive(Debug)]
pub struct BlacklistNouveau;

impl Task for BlacklistNouveau {
    fn name(&self) -> &'static str {
        "Blacklist nouveau"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        let output = match ctx.executor.capture_shell(LSMOD_COMMAND) {
            Ok(result) => {
                if !result.success {
                    ctx.log.warn(&format!(
                        "{LSMOD_COMMAND} exited unsuccessfully: {}",
                        result.stderr.trim()
                    ));
                }
                result.stdout
            }
            Err(e) => {
                ctx.log.warn(&format!("{e}; treating module list as empty"));
                String::new()
            }
        };
        let loaded = is_module_loaded(&output, NOUVEAU);
        ctx.log.debug(&format!("{NOUVEAU} loaded: {loaded}"));
        loaded
    }

    fn condition(&self) -> Option<&'static str> {
        Some("only when nouveau is loaded")
    }

    fn batch(&self, ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [blacklist_command(NOUVEAU, &ctx.config.modprobe_dir)],
        )
    }
}

/// Load the configured modules from the initramfs.
#[derive(Debug)]
pub struct ConfigureInitramfsModules;

impl Task for ConfigureInitramfsModules {
    fn name(&self) -> &'static str {
        "Configure initramfs modules"
    }

    fn batch(&self, ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [mkinitcpio_modules_command(
                &ctx.config.kernel_modules,
                &ctx.config.mkinitcpio_conf,
            )],
        )
    }
}
