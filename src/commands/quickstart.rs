//! # Quickstart Command
//!
//! Interactive first-run wizard: asks the handful of questions needed for a
//! working setup and writes the initial config file.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs::OpenOptions,
    io::{self, IsTerminal, Write},
    path::Path,
};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::{expand_tilde, save_config};
use crate::{constants::DEFAULT_TWTFILE, Config};

/// Executes the quickstart command.
///
/// Refuses to overwrite an existing config unless `force` is set, and
/// requires an interactive terminal for the prompts.
pub fn execute(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to start over.",
            config_path.display()
        );
    }

    if !io::stdin().is_terminal() {
        anyhow::bail!("quickstart needs an interactive terminal");
    }

    println!("{}", "Welcome to twtr!".bold());
    println!("A few questions and you're set up. Defaults are in brackets.\n");

    let mut config = Config::default();
    config.nick = prompt("Nickname", "")?;
    config.twtfile = prompt("Path to your twtxt file", DEFAULT_TWTFILE)?;
    config.twturl = prompt("URL your twtxt file will be accessible at", "")?;
    config.disclose_identity = prompt_bool(
        "Disclose your identity in the User-Agent when fetching feeds?",
        false,
    )?;

    save_config(&config, config_path)?;

    // make sure the feed file exists so the first `tweet` just works
    if !config.twtfile.is_empty() {
        let twtfile = expand_tilde(&config.twtfile);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&twtfile)
            .with_context(|| format!("Failed to create twtfile: {}", twtfile.display()))?;
    }

    println!("\n{} Config written to {}", "✓".green(), config_path.display());
    println!("  Try: {}", "twtr tweet \"Hello, twtxt world!\"".cyan());

    Ok(())
}

/// Asks one question, returning the default when the answer is empty.
fn prompt(question: &str, default: &str) -> Result<String> {
    if default.is_empty() {
        eprint!("{} ", format!("{question}:").bold());
    } else {
        eprint!("{} [{default}] ", format!("{question}:").bold());
    }
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Asks a yes/no question.
fn prompt_bool(question: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    let answer = prompt(&format!("{question} ({hint})"), "")?;

    Ok(match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_config_refused_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config");
        std::fs::write(&config_path, "").unwrap();

        let err = execute(&config_path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
