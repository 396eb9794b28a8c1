//! Path utilities.
//!
//! Per-user files live under `~/.study-inspect/`:
//! - `~/.study-inspect/config.toml` - optional configuration

use std::path::PathBuf;

/// Returns the home directory for this tool (`~/.study-inspect/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".study-inspect")
}

/// Returns the default config file path (`~/.study-inspect/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
