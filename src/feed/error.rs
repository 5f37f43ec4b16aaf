//! # Parse Errors
//!
//! Positional errors produced while parsing a twtxt feed.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// An error that occurred while parsing a twtxt feed.
///
/// Every variant carries the 1-based physical line number it occurred on.
/// The parser stops at the first error: the source format is append-only by
/// convention, so nothing after a corrupt line can be trusted.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A post line has no tab between timestamp and body.
    #[error("parse error on line {line}: missing tab delimiter")]
    MissingDelimiter {
        /// 1-based line number of the offending line
        line: usize,
    },

    /// A post line has no text before the tab delimiter.
    #[error("parse error on line {line}: missing timestamp")]
    MissingTimestamp {
        /// 1-based line number of the offending line
        line: usize,
    },

    /// The text before the tab is not a valid RFC 3339 timestamp.
    #[error("parse error on line {line}: {source}")]
    InvalidTimestamp {
        /// 1-based line number of the offending line
        line: usize,
        /// Underlying timestamp format error
        source: chrono::ParseError,
    },
}

impl ParseError {
    /// Returns the 1-based line number the error occurred on.
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingDelimiter { line }
            | Self::MissingTimestamp { line }
            | Self::InvalidTimestamp { line, .. } => *line,
        }
    }
}
