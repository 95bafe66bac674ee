// linkdeck platform paths for Linux
// Config: ~/.config/linkdeck
// Data:   ~/.local/share/linkdeck

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for linkdeck on Linux.
/// Uses `$XDG_CONFIG_HOME/linkdeck` if set, otherwise `~/.config/linkdeck`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("linkdeck")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("linkdeck")
    }
}

/// Returns the data directory for linkdeck on Linux.
/// Uses `$XDG_DATA_HOME/linkdeck` if set, otherwise `~/.local/share/linkdeck`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("linkdeck")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("linkdeck")
    }
}
