//! AUR helper bootstrap and package installation.
use super::{Context, Task};
use crate::batch::Batch;

/// AUR repository of the paru helper (git build).
const PARU_AUR_URL: &str = "https://aur.archlinux.org/paru-git.git";

/// Official-repository packages for the desktop.
const PACMAN_PACKAGES: &[&str] = &[
    "git",
    "neovim",
    "pyenv",
    "hyprland",
    "hyprpaper",
    "zsh",
    "noto-fonts-emoji",
    "adobe-source-han-sans-jp-fonts",
    "vlc",
    "eog",
    "waybar",
    "polkit-kde-agent",
    "xdg-desktop-portal-hyprland",
    "xdg-desktop-portal-gtk",
    "gnome-themes-extra",
    "fastfetch",
    "wl-clipboard",
    "wtype",
    "ranger",
    "wezterm",
    "discord",
    "dunst",
    "fontconfig",
    "zip",
    "unzip",
    "p7zip",
    "lsd",
    "bat",
    "fzf",
];

/// AUR packages, installed through paru.
const AUR_PACKAGES: &[&str] = &[
    "brave-bin",
    "rofi-wayland",
    "rofimoji",
    "clipse",
    "hyprshot",
    "spotify",
    "adwaita-qt5-git",
    "adwaita-qt6-git",
    "fnm",
];

/// Install packages from the official repositories, skipping up-to-date ones.
#[must_use]
pub fn pacman_install(packages: &[&str]) -> String {
    format!("sudo pacman -S --needed --noconfirm {}", packages.join(" "))
}

/// Build and install the paru AUR helper from source.
#[derive(Debug)]
pub struct InstallParu;

impl Task for InstallParu {
    fn name(&self) -> &'static str {
        "Install paru"
    }

    fn batch(&self, _ctx: &Context) -> Batch {
        let clone = format!("git clone {PARU_AUR_URL} $HOME/paru-git");
        Batch::new(
            self.name(),
            [
                // Issued twice; the second clone fails on the existing
                // directory and is ignored. Kept until confirmed redundant.
                clone.clone(),
                clone,
                "cd $HOME/paru-git && makepkg -si".to_string(),
                "sudo rm -rf $HOME/paru-git".to_string(),
            ],
        )
    }
}

/// Install the desktop package set from pacman and the AUR.
#[derive(Debug)]
pub struct InstallPackages;

impl Task for InstallPackages {
    fn name(&self) -> &'static str {
        "Install packages"
    }

    fn batch(&self, _ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [
                pacman_install(PACMAN_PACKAGES),
                format!("paru -S --noconfirm --needed {}", AUR_PACKAGES.join(" ")),
            ],
        )
    }
}
