//! Configuration module for bowlscore
//!
//! This module handles:
//! - Project-level configuration (bowlscore.toml in the working directory)
//! - User-level configuration (~/.config/bowlscore/config.toml)
//! - CLI defaults

mod project_config;
mod user_config;

pub use project_config::{load_config, load_config_from, BowlConfig, CliDefaults};
pub use user_config::user_config_path;
