//! # Tweet Command
//!
//! Appends a new post to the user's twtfile.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::{fs::OpenOptions, io::Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::expand_tilde;
use crate::{feed::Post, hook, Config};

/// Executes the tweet command.
///
/// Warns on stderr when the post exceeds `character_warning`, runs the
/// pre-tweet hook, appends the formatted post line to the twtfile, then
/// runs the post-tweet hook. A failing pre-hook aborts before anything is
/// written. `character_limit` only shortens incoming posts on display and
/// never blocks an outgoing one.
pub fn execute(config: &Config, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Cannot post an empty tweet");
    }

    let length = text.chars().count() as u64;
    if config.character_warning > 0 && length > config.character_warning {
        eprintln!(
            "{} tweet is {length} characters (character_warning is {})",
            "warning:".yellow().bold(),
            config.character_warning
        );
    }

    if config.twtfile.is_empty() {
        anyhow::bail!("No twtfile configured. Set it with: twtr config set twtfile ~/twtxt.txt");
    }

    let twtfile = expand_tilde(&config.twtfile);
    let twtfile_str = twtfile.display().to_string();

    hook::run(&config.pre_tweet_hook, &twtfile_str).context("pre_tweet_hook failed")?;

    let post = Post::new(text);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&twtfile)
        .with_context(|| format!("Failed to open twtfile: {}", twtfile.display()))?;
    writeln!(file, "{post}")
        .with_context(|| format!("Failed to append to twtfile: {}", twtfile.display()))?;

    hook::run(&config.post_tweet_hook, &twtfile_str).context("post_tweet_hook failed")?;

    if !config.porcelain {
        println!("{} Posted to {}", "✓".green(), twtfile.display());
    }

    Ok(())
}
