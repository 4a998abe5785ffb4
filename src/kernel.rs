//! Kernel module configuration: initramfs module list, nouveau detection and
//! the modprobe directives written during setup.
use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// Command whose output lists the currently loaded kernel modules.
pub const LSMOD_COMMAND: &str = "lsmod";

/// Open-source NVIDIA driver that conflicts with the proprietary one.
pub const NOUVEAU: &str = "nouveau";

/// A kernel module loaded early through the initramfs `MODULES=()` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelModule {
    /// Core proprietary NVIDIA driver.
    Nvidia,
    /// Mode-setting support.
    NvidiaModeset,
    /// Unified memory (CUDA).
    NvidiaUvm,
    /// DRM/KMS integration, required by Wayland compositors.
    NvidiaDrm,
}

/// Modules written into the initramfs configuration, in order.
pub const DEFAULT_INITRAMFS_MODULES: &[KernelModule] = &[
    KernelModule::Nvidia,
    KernelModule::NvidiaModeset,
    KernelModule::NvidiaUvm,
    KernelModule::NvidiaDrm,
];

impl KernelModule {
    /// Module name as known to the kernel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nvidia => "nvidia",
            Self::NvidiaModeset => "nvidia_modeset",
            Self::NvidiaUvm => "nvidia_uvm",
            Self::NvidiaDrm => "nvidia_drm",
        }
    }
}

impl fmt::Display for KernelModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Space-separated module names, as used inside `MODULES=(...)`.
#[must_use]
pub fn format_module_list(modules: &[KernelModule]) -> String {
    modules
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `path` as a single `sh` word.
///
/// Paths made only of safe characters are returned unchanged; anything else
/// is wrapped in single quotes with embedded quotes escaped as `'\''`.
#[must_use]
pub fn shell_quote(path: &Path) -> String {
    let text = path.display().to_string();
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+,:@%=".contains(c));
    if plain {
        text
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}

/// In-place edit that fills the empty `MODULES=()` array of `mkinitcpio_conf`.
///
/// Only an empty array is replaced; a file that already lists modules is left
/// untouched by `sed`.
#[must_use]
pub fn mkinitcpio_modules_command(modules: &[KernelModule], mkinitcpio_conf: &Path) -> String {
    format!(
        "sudo sed -i \"s/MODULES=()/MODULES=({})/\" {}",
        format_module_list(modules),
        shell_quote(mkinitcpio_conf)
    )
}

/// Whether `module` appears in captured `lsmod` output (case-insensitive).
#[must_use]
pub fn is_module_loaded(lsmod_output: &str, module: &str) -> bool {
    lsmod_output
        .to_lowercase()
        .contains(&module.to_lowercase())
}

/// Write a modprobe blacklist entry for `module` into `modprobe_dir`.
#[must_use]
pub fn blacklist_command(module: &str, modprobe_dir: &Path) -> String {
    format!(
        "sudo echo \"blacklist {module}\" > {}",
        shell_quote(&modprobe_dir.join(format!("{module}.conf")))
    )
}

/// Enable DRM kernel mode setting and the framebuffer device for `nvidia_drm`.
#[must_use]
pub fn nvidia_drm_options_command(modprobe_dir: &Path) -> String {
    format!(
        "sudo echo \"options {} modeset=1 fbdev=1\" > {}",
        KernelModule::NvidiaDrm,
        shell_quote(&modprobe_dir.join("nvidia.conf"))
    )
}
