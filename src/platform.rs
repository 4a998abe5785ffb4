//! Host detection. Purely advisory: nothing is refused on a foreign host.
use std::path::Path;

/// Marker file present on every Arch Linux installation.
const ARCH_RELEASE: &str = "/etc/arch-release";

/// Platform information for the current system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// `/etc/arch-release` exists.
    pub is_arch: bool,
    /// `pacman` was found on `PATH`.
    pub has_pacman: bool,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            is_arch: Path::new(ARCH_RELEASE).exists(),
            has_pacman: which::which("pacman").is_ok(),
        }
    }

    /// Create a platform with explicit values.
    #[must_use]
    pub const fn new(is_arch: bool, has_pacman: bool) -> Self {
        Self {
            is_arch,
            has_pacman,
        }
    }

    /// Warnings to show before provisioning a host this plan was not written for.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.is_arch {
            warnings.push(format!(
                "{ARCH_RELEASE} not found: this does not look like Arch Linux"
            ));
        }
        if !self.has_pacman {
            warnings.push("pacman not found on PATH: package commands will fail".to_string());
        }
        warnings
    }
}
