//! # Follow Commands
//!
//! Manage the list of followed sources: `follow`, `unfollow`, `following`.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::save_config;
use crate::{client, constants::NICK_FIELD, feed::Document, Config};

/// Executes the follow command: adds `nick` -> `url` to the following map
/// and saves the config.
///
/// With `check_following` enabled the source is fetched and parsed first,
/// so a dead or corrupt feed is rejected before it lands in the config. A
/// feed that declares a different nickname in its metadata is followed
/// anyway, with a hint.
pub fn execute(
    config: &mut Config,
    config_path: &Path,
    nick: &str,
    url: &str,
    replace: bool,
) -> Result<()> {
    if !replace {
        if let Some(existing) = config.following.get(nick) {
            anyhow::bail!(
                "Already following {nick} ({existing}). Use --replace to overwrite."
            );
        }
    }

    if config.check_following {
        let text = client::fetch_source(url, config)
            .with_context(|| format!("Cannot verify feed for {nick}"))?;
        let document = Document::parse(Some(&text))
            .with_context(|| format!("Feed for {nick} is not a valid twtxt feed"))?;

        if let Some(declared) = document.fields.value(NICK_FIELD) {
            if declared != nick {
                eprintln!(
                    "{} feed declares nick {declared:?}, following as {nick:?}",
                    "hint:".cyan().bold()
                );
            }
        }
    }

    config.following.insert(nick.to_string(), url.to_string());
    save_config(config, config_path)?;

    if !config.porcelain {
        println!("{} Following {} ({url})", "✓".green(), nick.bold());
    }

    Ok(())
}

/// Executes the unfollow command: removes `nick` from the following map
/// and saves the config.
pub fn unfollow(config: &mut Config, config_path: &Path, nick: &str) -> Result<()> {
    if config.following.remove(nick).is_none() {
        anyhow::bail!("Not following {nick}");
    }

    save_config(config, config_path)?;

    if !config.porcelain {
        println!("{} Unfollowed {}", "✓".green(), nick.bold());
    }

    Ok(())
}

/// Executes the following command: lists all followed sources,
/// lexicographically by nickname.
pub fn following(config: &Config) -> Result<()> {
    for (nick, url) in &config.following {
        if config.porcelain {
            println!("{nick}\t{url}");
        } else {
            println!("{} {url}", format!("{nick:>12}").bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn local_feed(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_follow_and_unfollow() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config");
        let feed = local_feed(dir.path(), "alice.txt", "2016-02-03T23:05:00+01:00\thi\n");

        let mut config = Config::default();
        config.porcelain = true;

        execute(&mut config, &config_path, "alice", &feed, false).unwrap();
        assert_eq!(config.following.get("alice"), Some(&feed));

        // the config was persisted
        let saved = Config::parse(&fs::read_to_string(&config_path).unwrap()).unwrap();
        assert_eq!(saved.following.get("alice"), Some(&feed));

        unfollow(&mut config, &config_path, "alice").unwrap();
        assert!(config.following.is_empty());
    }

    #[test]
    fn test_follow_duplicate_requires_replace() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config");
        let feed = local_feed(dir.path(), "alice.txt", "");

        let mut config = Config::default();
        config.porcelain = true;
        config.check_following = false;
        config
            .following
            .insert("alice".to_string(), "old-url".to_string());

        let err = execute(&mut config, &config_path, "alice", &feed, false).unwrap_err();
        assert!(err.to_string().contains("Already following"));

        execute(&mut config, &config_path, "alice", &feed, true).unwrap();
        assert_eq!(config.following.get("alice"), Some(&feed));
    }

    #[test]
    fn test_follow_check_rejects_corrupt_feed() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config");
        let feed = local_feed(dir.path(), "bad.txt", "this is not a twtxt feed\n");

        let mut config = Config::default();
        config.porcelain = true;

        let err = execute(&mut config, &config_path, "bad", &feed, false).unwrap_err();
        assert!(err.to_string().contains("not a valid twtxt feed"));
        assert!(config.following.is_empty());
    }

    #[test]
    fn test_follow_without_check_skips_validation() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config");

        let mut config = Config::default();
        config.porcelain = true;
        config.check_following = false;

        // source doesn't even exist, but check_following is off
        execute(&mut config, &config_path, "ghost", "/nonexistent.txt", false).unwrap();
        assert!(config.following.contains_key("ghost"));
    }

    #[test]
    fn test_unfollow_unknown_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config");

        let mut config = Config::default();
        let err = unfollow(&mut config, &config_path, "nobody").unwrap_err();
        assert!(err.to_string().contains("Not following"));
    }
}
