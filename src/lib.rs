//! # twtr
//!
//! A decentralized, minimalist microblogging client for hackers.
//!
//! Posts live in a plain, append-only, line-oriented text file (a twtxt
//! feed), addressed by a URL and shared over plain HTTP. Each line is one
//! post: an RFC 3339 timestamp, a tab, and the message. Comment lines may
//! carry `# key = value` metadata fields.
//!
//! ## Features
//!
//! - **Plain Text Feeds**: posts are lines in a twtxt.txt file, grep-friendly
//!   and trivially appendable
//! - **Round-Trip Parsing**: feeds re-serialize to the exact on-disk format
//! - **Typed Configuration**: documented defaults, strict coercion, and a
//!   deterministic save format
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod feed;
pub mod hook;
pub mod ui;

pub use config::{Config, ConfigError, Sorting};
pub use feed::{Document, Feed, Field, Fields, ParseError, Post};
