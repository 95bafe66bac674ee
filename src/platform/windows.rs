// linkdeck platform paths for Windows
// Config: %APPDATA%/linkdeck
// Data:   %APPDATA%/linkdeck

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for linkdeck on Windows.
/// `%APPDATA%/linkdeck`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("linkdeck")
}

/// Returns the data directory for linkdeck on Windows.
/// `%APPDATA%/linkdeck`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("linkdeck")
}
