// linkdeck platform paths for macOS
// Config: ~/Library/Application Support/linkdeck
// Data:   ~/Library/Application Support/linkdeck

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for linkdeck on macOS.
/// `~/Library/Application Support/linkdeck`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("linkdeck")
}

/// Returns the data directory for linkdeck on macOS.
/// `~/Library/Application Support/linkdeck`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("linkdeck")
}
