//! Proprietary NVIDIA driver tasks.
use super::packages::pacman_install;
use super::{Context, Task};
use crate::batch::Batch;
use crate::kernel::nvidia_drm_options_command;

/// Proprietary driver stack, including 32-bit and Vulkan/Wayland support.
const NVIDIA_PACKAGES: &[&str] = &[
    "nvidia-dkms",
    "nvidia-utils",
    "nvidia-settings",
    "opencl-nvidia",
    "cuda",
    "lib32-nvidia-utils",
    "vulkan-icd-loader",
    "egl-wayland",
];

/// Install the proprietary NVIDIA driver and generate an X configuration.
#[derive(Debug)]
pub struct InstallNvidiaDrivers;

impl Task for InstallNvidiaDrivers {
    fn name(&self) -> &'static str {
        "Install NVIDIA drivers"
    }

    fn batch(&self, _ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [
                pacman_install(NVIDIA_PACKAGES),
                "sudo nvidia-xconfig".to_string(),
            ],
        )
    }
}

/// Enable DRM mode setting and rebuild every initramfs preset.
///
/// Runs after the initramfs module list is written so the rebuild picks it up.
#[derive(Debug)]
pub struct ConfigureNvidiaDrm;

impl Task for ConfigureNvidiaDrm {
    fn name(&self) -> &'static str {
        "Configure NVIDIA DRM"
    }

    fn batch(&self, ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [
                nvidia_drm_options_command(&ctx.config.modprobe_dir),
                "sudo mkinitcpio -P".to_string(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::test_helpers::{MemoryLog, RecordingExecutor, make_context};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn ctx() -> Context {
        make_context(
            Arc::new(RecordingExecutor::default()),
            Arc::new(MemoryLog::default()),
        )
    }

    #[test]
    fn drivers_then_xconfig() {
        assert_eq!(
            InstallNvidiaDrivers.batch(&ctx()).commands(),
            [
                "sudo pacman -S --needed --noconfirm nvidia-dkms nvidia-utils nvidia-settings opencl-nvidia cuda lib32-nvidia-utils vulkan-icd-loader egl-wayland",
                "sudo nvidia-xconfig",
            ]
        );
    }

    #[test]
    fn drm_options_precede_initramfs_rebuild() {
        assert_eq!(
            ConfigureNvidiaDrm.batch(&ctx()).commands(),
            [
                "sudo echo \"options nvidia_drm modeset=1 fbdev=1\" > /etc/modprobe.d/nvidia.conf",
                "sudo mkinitcpio -P",
            ]
        );
    }

    #[test]
    fn drm_options_follow_modprobe_dir() {
        let mut ctx = ctx();
        ctx.config.modprobe_dir = PathBuf::from("/mnt/etc/modprobe.d");
        let batch = ConfigureNvidiaDrm.batch(&ctx);
        assert!(
            batch
                .iter()
                .any(|c| c.ends_with("> /mnt/etc/modprobe.d/nvidia.conf"))
        );
    }
}
