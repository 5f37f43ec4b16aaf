//! # View Command
//!
//! Displays the posts of a single feed, by followed nickname or ad-hoc
//! source.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use super::timeline::{present, Entry};
use crate::{client, constants::NICK_FIELD, feed::Document, Config};

/// Executes the view command.
///
/// `source` is either a followed nickname or a feed URL / local path.
/// Unlike the timeline, a source that cannot be fetched or parsed is a hard
/// error: it is the one feed the user asked for.
pub fn execute(config: &Config, source: &str) -> Result<()> {
    let (nick, url) = match config.following.get(source) {
        Some(url) => (Some(source), url.as_str()),
        None => (None, source),
    };

    let text = client::fetch_source(url, config)
        .with_context(|| format!("Cannot fetch feed: {url}"))?;
    let document =
        Document::parse(Some(&text)).with_context(|| format!("Cannot parse feed: {url}"))?;

    // followed nickname, else the feed's self-declared nick, else the source
    let nick = nick
        .or_else(|| document.fields.value(NICK_FIELD))
        .unwrap_or(source)
        .to_string();

    let entries = document
        .posts
        .into_iter()
        .map(|post| Entry {
            nick: nick.clone(),
            post,
        })
        .collect();

    present(entries, config)
}
