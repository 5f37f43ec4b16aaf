//! # Constants
//!
//! Centralized constants for magic values used throughout twtr.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Feed Format
// =============================================================================

/// Prefix that marks a feed line as a comment.
pub const COMMENT_PREFIX: char = '#';

/// Delimiter between the timestamp and the body of a post line.
pub const POST_DELIMITER: char = '\t';

/// Separator between key and value in a metadata field comment.
pub const FIELD_SEPARATOR: char = '=';

/// Metadata field under which a feed declares its own nickname.
pub const NICK_FIELD: &str = "nick";

// =============================================================================
// Configuration Format
// =============================================================================

/// Configuration directory name (inside the platform config directory).
pub const CONFIG_DIR: &str = "twtxt";

/// Configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config";

/// Section holding the client settings.
pub const TWTXT_SECTION: &str = "twtxt";

/// Section mapping followed nicknames to feed URLs.
pub const FOLLOWING_SECTION: &str = "following";

/// Placeholder in hook commands that expands to the twtfile path.
pub const TWTFILE_PLACEHOLDER: &str = "{twtfile}";

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default number of posts shown by `timeline` (0 = unlimited).
pub const DEFAULT_LIMIT_TIMELINE: u64 = 20;

/// Default cache staleness interval in seconds.
pub const DEFAULT_UPDATE_INTERVAL: u64 = 10;

/// Default network timeout in seconds.
pub const DEFAULT_TIMEOUT: f64 = 5.0;

/// Default twtfile path suggested by `quickstart`.
pub const DEFAULT_TWTFILE: &str = "~/twtxt.txt";
