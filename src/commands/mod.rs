//! # Commands
//!
//! CLI command implementations for twtr.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

pub mod config;
pub mod follow;
pub mod quickstart;
pub mod timeline;
pub mod tweet;
pub mod view;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub use self::{
    config::execute as show_config,
    config::{get as config_get, path as config_path, set as config_set},
    follow::{execute as follow, following, unfollow},
    quickstart::execute as quickstart,
    timeline::execute as timeline,
    tweet::execute as tweet,
    view::execute as view,
};
use crate::Config;

/// Resolves the config file path: an explicit `--config` override, or the
/// platform default.
pub fn resolve_config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    Config::default_path().context("Could not determine config directory")
}

/// Loads the configuration from the resolved path.
/// Fails if the config doesn't exist — the user must run `twtr quickstart`
/// first.
pub fn load_config(override_path: Option<&Path>) -> Result<(Config, PathBuf)> {
    let path = resolve_config_path(override_path)?;

    if !path.exists() {
        anyhow::bail!(
            "Config not found at {}. Run {} first.",
            path.display(),
            "twtr quickstart".green()
        );
    }

    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let config = Config::parse(&source)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    Ok((config, path))
}

/// Saves the configuration to the given path, creating parent directories
/// as needed.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = config.serialize()?;
    fs::write(path, content).with_context(|| format!("Failed to write config: {}", path.display()))
}

/// Expands a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(path)
}
