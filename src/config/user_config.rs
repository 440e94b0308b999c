//! User-level configuration location

use std::path::PathBuf;

/// Path of the per-user config file, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bowlscore").join("config.toml"))
}
