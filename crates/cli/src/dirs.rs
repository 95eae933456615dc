//! Platform-specific directory utilities
//!
//! Provides the default dataset location, following platform conventions
//! for data directories.

use std::path::PathBuf;

/// Get the platform-specific data directory for starmap
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/starmap`
/// - Linux: `~/.local/share/starmap` (or `$XDG_DATA_HOME/starmap`)
/// - Windows: `%APPDATA%\starmap`
/// - Fallback: `./data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "starmap")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Default dataset file inside [`data_dir`].
pub fn default_database() -> PathBuf {
    data_dir().join("static.db")
}
