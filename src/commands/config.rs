//! # Config Command
//!
//! Shows the effective configuration, reads or updates single options, and
//! prints the config file location.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;

use super::save_config;
use crate::Config;

/// Executes the bare config command: prints the fully resolved
/// configuration in its on-disk form.
pub fn execute(config: &Config) -> Result<()> {
    print!("{}", config.serialize()?);
    Ok(())
}

/// Prints the current value of a single option.
pub fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", config.get(key)?);
    Ok(())
}

/// Updates a single option and persists the config.
pub fn set(config: &mut Config, config_path: &Path, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    save_config(config, config_path)
}

/// Prints the config file location.
pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
