#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing
)]
//! Integration tests for the `setup` command.
//!
//! These drive the real task list against a recording executor and check the
//! exact ordered command stream, the nouveau conditional, continue-on-error
//! behaviour and the `--skip` / `--only` filters.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use archsetup::cli::SetupOpts;
use archsetup::commands::setup::{run_tasks, select_tasks};
use archsetup::logging::TaskStatus;
use archsetup::tasks;
use common::{MemoryLog, RecordingExecutor};

const BLACKLIST: &str = "sudo echo \"blacklist nouveau\" > /etc/modprobe.d/nouveau.conf";

/// Every command a full run issues when nouveau is loaded, in order.
const FULL_RUN: &[&str] = &[
    "sudo pacman -Syu --noconfirm",
    "sudo pacman -Rns --noconfirm dolphin vim kitty",
    "git clone https://aur.archlinux.org/paru-git.git $HOME/paru-git",
    "git clone https://aur.archlinux.org/paru-git.git $HOME/paru-git",
    "cd $HOME/paru-git && makepkg -si",
    "sudo rm -rf $HOME/paru-git",
    "sudo pacman -S --needed --noconfirm git neovim pyenv hyprland hyprpaper zsh noto-fonts-emoji adobe-source-han-sans-jp-fonts vlc eog waybar polkit-kde-agent xdg-desktop-portal-hyprland xdg-desktop-portal-gtk gnome-themes-extra fastfetch wl-clipboard wtype ranger wezterm discord dunst fontconfig zip unzip p7zip lsd bat fzf",
    "paru -S --noconfirm --needed brave-bin rofi-wayland rofimoji clipse hyprshot spotify adwaita-qt5-git adwaita-qt6-git fnm",
    "chsh -s $(which zsh)",
    r#"sh -c "$(curl -fsSL https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh)""#,
    "git clone --depth=1 https://github.com/romkatv/powerlevel10k.git ${ZSH_CUSTOM:-$HOME/.oh-my-zsh/custom}/themes/powerlevel10k",
    "git clone https://github.com/zsh-users/zsh-autosuggestions ${ZSH_CUSTOM:-~/.oh-my-zsh/custom}/plugins/zsh-autosuggestions",
    "git clone https://github.com/zsh-users/zsh-syntax-highlighting.git ${ZSH_CUSTOM:-~/.oh-my-zsh/custom}/plugins/zsh-syntax-highlighting",
    "sudo pacman -S --needed --noconfirm linux-zen linux-zen-headers",
    "paru -S --needed --noconfirm update-grub",
    "sudo update-grub",
    "sudo pacman -S --needed --noconfirm nvidia-dkms nvidia-utils nvidia-settings opencl-nvidia cuda lib32-nvidia-utils vulkan-icd-loader egl-wayland",
    "sudo nvidia-xconfig",
    BLACKLIST,
    "sudo sed -i \"s/MODULES=()/MODULES=(nvidia nvidia_modeset nvidia_uvm nvidia_drm)/\" /etc/mkinitcpio.conf",
    "sudo echo \"options nvidia_drm modeset=1 fbdev=1\" > /etc/modprobe.d/nvidia.conf",
    "sudo mkinitcpio -P",
    "git clone https://github.com/SoyAlejandroCalixto/arch4devs $HOME/arch4devs",
    "sudo cp $HOME/arch4devs/. $HOME",
    "sudo rm -rf $HOME/arch4devs && sudo rm -rf $HOME/.git && sudo rm -rf $HOME/README.md && sudo rm -rf $HOME/LICENSE && sudo rm -rf $HOME/.gitignore",
    r#"git clone https://github.com/SoyAlejandroCalixto/nvim-config $HOME/.config/nvimecho -e "\neval \"\$(fnm env --use-on-cd --shell zsh)\"" >> $HOME/.zshrc"#,
];

fn run_all(executor: RecordingExecutor, opts: &SetupOpts, dry_run: bool) -> (Arc<RecordingExecutor>, Arc<MemoryLog>) {
    let executor = Arc::new(executor);
    let log = Arc::new(MemoryLog::default());
    let ctx = common::context(&executor, &log, dry_run);
    let all = tasks::all_setup_tasks();
    run_tasks(select_tasks(&all, opts), &ctx);
    (executor, log)
}

// ---------------------------------------------------------------------------
// Snapshot: setup task list
// ---------------------------------------------------------------------------

/// Snapshot of all setup task names in their declared order.
#[test]
fn setup_task_names() {
    let all_tasks = tasks::all_setup_tasks();
    let task_names: Vec<&str> = all_tasks.iter().map(|t| t.name()).collect();
    insta::assert_snapshot!("setup_task_names", task_names.join("\n"));
}

#[test]
fn setup_task_names_are_unique() {
    let all_tasks = tasks::all_setup_tasks();
    let names: HashSet<&str> = all_tasks.iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), all_tasks.len());
}

// ---------------------------------------------------------------------------
// Command stream
// ---------------------------------------------------------------------------

#[test]
fn full_run_issues_exact_command_list() {
    let (executor, log) = run_all(
        RecordingExecutor::with_lsmod("nvidia nouveau i915"),
        &SetupOpts::default(),
        false,
    );
    assert_eq!(executor.issued(), FULL_RUN);
    assert!(log.entries().iter().all(|e| e.status == TaskStatus::Ok));
}

#[test]
fn blacklist_omitted_without_nouveau() {
    let (executor, log) = run_all(
        RecordingExecutor::with_lsmod("nvidia i915"),
        &SetupOpts::default(),
        false,
    );
    let expected: Vec<&str> = FULL_RUN.iter().copied().filter(|c| *c != BLACKLIST).collect();
    assert_eq!(executor.issued(), expected);

    let blacklist = log
        .entries()
        .into_iter()
        .find(|e| e.name == "Blacklist nouveau")
        .expect("blacklist entry");
    assert_eq!(blacklist.status, TaskStatus::NotApplicable);
}

#[test]
fn nouveau_match_is_case_insensitive() {
    let (executor, _log) = run_all(
        RecordingExecutor::with_lsmod("Module Size Used by\nNOUVEAU 2457600 1\n"),
        &SetupOpts::default(),
        false,
    );
    assert!(executor.issued().iter().any(|c| c == BLACKLIST));
}

// ---------------------------------------------------------------------------
// Continue on error
// ---------------------------------------------------------------------------

#[test]
fn failing_commands_do_not_halt_the_run() {
    let executor = RecordingExecutor::with_lsmod("nouveau")
        .failing(FULL_RUN[0])
        .failing("sudo mkinitcpio -P");
    let (executor, log) = run_all(executor, &SetupOpts::default(), false);

    assert_eq!(executor.issued(), FULL_RUN);

    let failed: Vec<String> = log
        .entries()
        .into_iter()
        .filter(|e| e.status == TaskStatus::Failed)
        .map(|e| e.name)
        .collect();
    assert_eq!(failed, vec!["Update system", "Configure NVIDIA DRM"]);
    assert_eq!(log.warnings().len(), 2);
}

// ---------------------------------------------------------------------------
// Dry run
// ---------------------------------------------------------------------------

#[test]
fn dry_run_issues_nothing() {
    let (executor, log) = run_all(
        RecordingExecutor::with_lsmod("nouveau"),
        &SetupOpts::default(),
        true,
    );
    assert!(executor.issued().is_empty());
    assert_eq!(log.dry_runs(), FULL_RUN);
    assert!(log.entries().iter().all(|e| e.status == TaskStatus::DryRun));
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn only_filter_runs_matching_tasks() {
    let opts = SetupOpts {
        skip: vec![],
        only: vec!["zen".to_string()],
    };
    let (executor, log) = run_all(RecordingExecutor::default(), &opts, false);
    assert_eq!(executor.issued(), &FULL_RUN[13..16]);
    assert_eq!(log.entries().len(), 1);
}

#[test]
fn skip_filter_leaves_other_tasks_in_order() {
    let opts = SetupOpts {
        skip: vec!["Zsh".to_string()],
        only: vec![],
    };
    let (executor, _log) = run_all(RecordingExecutor::with_lsmod("nouveau"), &opts, false);
    let expected: Vec<&str> = FULL_RUN[..8].iter().chain(&FULL_RUN[13..]).copied().collect();
    assert_eq!(executor.issued(), expected);
}
