//! # Feed Parser
//!
//! Parses twtxt feed text into a [`Document`] of metadata fields and posts.
//!
//! See the twtxt file format specification:
//! <https://twtxt.readthedocs.io/en/latest/user/twtxtfile.html>
//! and the community metadata extensions:
//! <https://dev.twtxt.net/doc/metadataextension.html>
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use chrono::DateTime;

use super::{Feed, Field, Fields, ParseError, Post};
use crate::constants::{COMMENT_PREFIX, POST_DELIMITER};

/// The parsed contents of one twtxt feed: metadata fields and posts.
///
/// Fields and posts are interleaved in the source text but kept in two
/// separate sequences here; order is preserved within each sequence only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Metadata fields from `# key = value` comment lines
    pub fields: Fields,

    /// Posts, in the order they appear in the feed
    pub posts: Feed,
}

impl Document {
    /// Parses a twtxt feed from its raw text.
    ///
    /// An absent source (`None`) means "no feed yet" and yields an empty
    /// document, as does an empty string. Parsing is all-or-nothing: the
    /// first malformed post line aborts with a [`ParseError`] carrying its
    /// 1-based line number, and no partial document is returned. Field
    /// extraction from comment lines is best-effort and never fails.
    ///
    /// Line boundaries are the atomic unit: no post or field spans multiple
    /// physical lines. Both LF and CRLF line endings are accepted.
    pub fn parse(source: Option<&str>) -> Result<Self, ParseError> {
        let mut document = Self::default();

        let Some(source) = source else {
            return Ok(document);
        };

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;

            // comment lines never produce posts or errors, but may carry a
            // metadata field
            if line.starts_with(COMMENT_PREFIX) {
                if let Some(field) = Field::extract(line) {
                    document.fields.push(field);
                }
                continue;
            }

            // split the line into timestamp and body at the first tab
            let (timestamp, body) = match line.split_once(POST_DELIMITER) {
                Some((timestamp, body)) => (timestamp, Some(body)),
                None => (line, None),
            };

            // there has to be a timestamp
            if timestamp.is_empty() {
                return Err(ParseError::MissingTimestamp { line: line_number });
            }

            // there has to be a tab delimiter
            let Some(body) = body else {
                return Err(ParseError::MissingDelimiter { line: line_number });
            };

            // the timestamp must be RFC 3339 with an explicit UTC offset
            let timestamp = DateTime::parse_from_rfc3339(timestamp).map_err(|source| {
                ParseError::InvalidTimestamp {
                    line: line_number,
                    source,
                }
            })?;

            // the body is taken verbatim, it is not unescaped
            document.posts.push(Post::with_timestamp(timestamp, body));
        }

        Ok(document)
    }
}
