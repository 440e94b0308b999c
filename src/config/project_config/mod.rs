//! Project-level configuration support
//!
//! Loads defaults from `bowlscore.toml` in the working directory, falling
//! back to the user config file.
//!
//! # Configuration Format
//!
//! ```toml
//! # bowlscore.toml
//!
//! [defaults]
//! format = "json"
//! frames = true
//! no_color = true
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use super::user_config::user_config_path;

/// Project configuration loaded from bowlscore.toml
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct BowlConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Default CLI flags that can be set in config
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Show the frame-by-frame breakdown by default
    #[serde(default)]
    pub frames: Option<bool>,

    /// Disable colors by default
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Load configuration for a working directory.
///
/// Searches in this order:
/// 1. `bowlscore.toml` in `dir`
/// 2. the user config file
///
/// Unreadable or malformed files are logged and skipped.
pub fn load_config(dir: &Path) -> BowlConfig {
    load_config_from(dir, user_config_path().as_deref())
}

/// Same as [`load_config`] with an explicit user config path
pub fn load_config_from(dir: &Path, user_path: Option<&Path>) -> BowlConfig {
    let project_path = dir.join("bowlscore.toml");
    let candidates = std::iter::once(project_path.as_path()).chain(user_path);

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_toml_config(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    BowlConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<BowlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: BowlConfig = toml::from_str(&content)?;
    Ok(config)
}
