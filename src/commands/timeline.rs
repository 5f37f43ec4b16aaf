//! # Timeline Command
//!
//! Retrieves the user's own feed plus every followed source, merges the
//! posts, and displays the most recent ones.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::expand_tilde;
use crate::{
    client,
    feed::{Document, Post},
    ui, Config, Sorting,
};

/// One displayable timeline entry: a post attributed to a source nickname.
pub(crate) struct Entry {
    pub(crate) nick: String,
    pub(crate) post: Post,
}

/// Executes the timeline command.
///
/// Sources that cannot be fetched or parsed are reported as warnings and
/// skipped; a broken feed should never hide the rest of the timeline.
pub fn execute(config: &Config) -> Result<()> {
    let mut entries = Vec::new();

    // own feed, if configured and present
    if !config.twtfile.is_empty() {
        let twtfile = expand_tilde(&config.twtfile);
        let source = std::fs::read_to_string(&twtfile).ok();
        let document = Document::parse(source.as_deref())?;

        let nick = if config.nick.is_empty() {
            "you".to_string()
        } else {
            config.nick.clone()
        };

        for post in document.posts {
            entries.push(Entry {
                nick: nick.clone(),
                post,
            });
        }
    }

    // followed feeds
    for (nick, url) in &config.following {
        let text = match client::fetch_source(url, config) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("{} {nick}: {err:#}", "warning:".yellow().bold());
                continue;
            }
        };

        match Document::parse(Some(&text)) {
            Ok(document) => {
                for post in document.posts {
                    entries.push(Entry {
                        nick: nick.clone(),
                        post,
                    });
                }
            }
            Err(err) => {
                eprintln!("{} {nick}: {err}", "warning:".yellow().bold());
            }
        }
    }

    present(entries, config)
}

/// Sorts, limits, renders and displays a batch of entries per the config.
/// Shared with the view command, which gathers entries from one source.
pub(crate) fn present(mut entries: Vec<Entry>, config: &Config) -> Result<()> {
    // keep the most recent posts, displayed in the configured direction
    entries.sort_by(|a, b| b.post.timestamp().cmp(&a.post.timestamp()));
    if config.limit_timeline > 0 {
        entries.truncate(usize::try_from(config.limit_timeline).unwrap_or(usize::MAX));
    }
    if config.sorting == Sorting::Ascending {
        entries.reverse();
    }

    let output = render(&entries, config);
    ui::display(&output, config.use_pager && !config.porcelain)
}

/// Shortens an incoming body to `character_limit` characters for display.
/// 0 disables shortening.
fn shorten(body: &str, limit: u64) -> String {
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    if limit == 0 || body.chars().count() <= limit {
        return body.to_string();
    }

    let mut shortened: String = body.chars().take(limit).collect();
    shortened.push('…');
    shortened
}

/// Renders the timeline entries either as human-readable blocks or, in
/// porcelain mode, as stable tab-separated lines. Human output shortens
/// bodies past `character_limit`; porcelain keeps them verbatim for
/// scripts.
fn render(entries: &[Entry], config: &Config) -> String {
    let mut output = String::new();

    for entry in entries {
        if config.porcelain {
            let _ = writeln!(
                output,
                "{}\t{}\t{}",
                entry.nick,
                entry.post.timestamp().to_rfc3339(),
                entry.post.body()
            );
        } else {
            let time = ui::format_time(entry.post.timestamp(), config.use_abs_time);
            let _ = writeln!(
                output,
                "{} {} ({})\n{}\n",
                "➤".cyan(),
                entry.nick.bold(),
                time.dimmed(),
                shorten(entry.post.body(), config.character_limit)
            );
        }
    }

    output
}
