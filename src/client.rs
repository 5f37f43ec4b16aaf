//! # Feed Retrieval
//!
//! Fetches raw feed text from followed sources. Remote sources are plain
//! HTTP(S) GETs; anything else is treated as a local file path, which keeps
//! the rest of the client fully testable offline.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::fs;

use anyhow::{Context, Result};

use crate::config::Config;

/// Retrieves the raw text of a feed source.
///
/// Sources starting with `http://` or `https://` are fetched over the
/// network honoring the configured `timeout`; all other sources are read
/// from the local filesystem.
pub fn fetch_source(source: &str, config: &Config) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch(source, config)
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read feed: {source}"))
    }
}

/// Fetches a feed over HTTP(S).
///
/// When `disclose_identity` is enabled and both `nick` and `twturl` are
/// configured, the request carries a User-Agent that lets feed owners
/// discover who follows them.
pub fn fetch(url: &str, config: &Config) -> Result<String> {
    let mut request = minreq::get(url);

    if config.timeout > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seconds = config.timeout.ceil().max(1.0) as u64;
        request = request.with_timeout(seconds);
    }

    if config.disclose_identity && !config.nick.is_empty() && !config.twturl.is_empty() {
        request = request.with_header("User-Agent", user_agent(config));
    }

    let response = request
        .send()
        .with_context(|| format!("Failed to fetch feed: {url}"))?;

    if !(200..300).contains(&response.status_code) {
        anyhow::bail!(
            "Failed to fetch feed: {url}: HTTP {} {}",
            response.status_code,
            response.reason_phrase
        );
    }

    let body = response
        .as_str()
        .with_context(|| format!("Feed is not valid UTF-8: {url}"))?;

    Ok(body.to_string())
}

/// Builds the identity-disclosing User-Agent header value.
fn user_agent(config: &Config) -> String {
    format!(
        "twtr/{} (+{}; @{})",
        env!("CARGO_PKG_VERSION"),
        config.twturl,
        config.nick
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        let mut config = Config::default();
        config.nick = "buckket".to_string();
        config.twturl = "https://example.org/twtxt.txt".to_string();

        let agent = user_agent(&config);
        assert!(agent.starts_with("twtr/"));
        assert!(agent.ends_with("(+https://example.org/twtxt.txt; @buckket)"));
    }

    #[test]
    fn test_fetch_source_local_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.txt");
        fs::write(&path, "2016-02-03T23:05:00+01:00\thello\n").unwrap();

        let text = fetch_source(path.to_str().unwrap(), &Config::default()).unwrap();
        assert_eq!(text, "2016-02-03T23:05:00+01:00\thello\n");
    }

    #[test]
    fn test_fetch_source_missing_local_path() {
        let err = fetch_source("/nonexistent/feed.txt", &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read feed"));
    }
}
