//! System upgrade and removal of preinstalled applications.
use super::{Context, Task};
use crate::batch::Batch;

/// Packages shipped by the base install that this setup replaces.
const UNUSED_PACKAGES: &[&str] = &["dolphin", "vim", "kitty"];

/// Full system upgrade before anything else is installed.
#[derive(Debug)]
pub struct UpdateSystem;

impl Task for UpdateSystem {
    fn name(&self) -> &'static str {
        "Update system"
    }

    fn batch(&self, _ctx: &Context) -> Batch {
        Batch::new(self.name(), ["sudo pacman -Syu --noconfirm"])
    }
}

/// Remove preinstalled applications with their unneeded dependencies.
#[derive(Debug)]
pub struct RemoveUnusedPackages;

impl Task for RemoveUnusedPackages {
    fn name(&self) -> &'static str {
        "Remove unused packages"
    }

    fn batch(&self, _ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [format!(
                "sudo pacman -Rns --noconfirm {}",
                UNUSED_PACKAGES.join(" ")
            )],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::test_helpers::{MemoryLog, RecordingExecutor, make_context};
    use std::sync::Arc;

    fn ctx() -> Context {
        make_context(
            Arc::new(RecordingExecutor::default()),
            Arc::new(MemoryLog::default()),
        )
    }

    #[test]
    fn update_is_a_single_full_upgrade() {
        assert_eq!(
            UpdateSystem.batch(&ctx()).commands(),
            ["sudo pacman -Syu --noconfirm"]
        );
    }

    #[test]
    fn removal_lists_every_unused_package() {
        assert_eq!(
            RemoveUnusedPackages.batch(&ctx()).commands(),
            ["sudo pacman -Rns --noconfirm dolphin vim kitty"]
        );
    }
}
