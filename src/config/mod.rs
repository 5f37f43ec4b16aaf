//! # Configuration
//!
//! Typed client settings merged from documented defaults and a sectioned
//! key/value source: a `[twtxt]` section for the scalar options and a
//! `[following]` section mapping nicknames to feed URLs.
//!
//! Loading is a pure builder: every recognized key is coerced in one pass
//! and either a fully resolved [`Config`] or the first error is returned,
//! never a partially merged value. Saving is deterministic so that repeated
//! saves of unchanged data are byte-identical.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::BTreeMap, fmt, path::PathBuf, str::FromStr};

use serde::Serialize;
use thiserror::Error;
use toml::Value;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_LIMIT_TIMELINE, DEFAULT_TIMEOUT,
    DEFAULT_UPDATE_INTERVAL, FOLLOWING_SECTION, TWTXT_SECTION,
};

/// An error produced while loading, saving, or updating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value failed coercion to its option's type.
    #[error("invalid value for '{key}'")]
    FieldType {
        /// The offending option key
        key: String,
        /// Underlying coercion error
        #[source]
        source: ValueError,
    },

    /// The `sorting` option holds something other than `ascending` or
    /// `descending` (compared case-insensitively).
    #[error("invalid value for 'sorting': {value:?}")]
    InvalidEnum {
        /// The rejected value
        value: String,
    },

    /// The option key is not recognized.
    #[error("unknown configuration key: {key:?}")]
    UnknownKey {
        /// The rejected key
        key: String,
    },

    /// The settings source is not valid sectioned key/value syntax.
    #[error("invalid configuration syntax")]
    Syntax(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),
}

/// A coercion failure for a single configuration value.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The value has an incompatible type, e.g. a table where a scalar is
    /// expected.
    #[error("expected {expected}")]
    WrongType {
        /// Human-readable name of the expected type
        expected: &'static str,
    },

    /// The value is not a recognized boolean spelling.
    #[error("not a boolean: {0:?}")]
    ParseBool(String),

    /// The value is not a base-10 non-negative integer.
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    /// The value is not a decimal float.
    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// The value is a negative integer where a count is expected.
    #[error("negative value: {0}")]
    Negative(i64),
}

/// Direction in which the timeline is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sorting {
    /// Oldest posts first
    Ascending,

    /// Newest posts first
    #[default]
    Descending,
}

impl Sorting {
    /// The canonical textual form, as written to the config file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sorting {
    type Err = ConfigError;

    /// Parses a sort direction, case-insensitively. Anything other than
    /// `ascending` or `descending` is an [`ConfigError::InvalidEnum`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            _ => Err(ConfigError::InvalidEnum {
                value: s.to_string(),
            }),
        }
    }
}

/// The fully resolved client configuration.
///
/// Every option always holds a concrete value: either its documented
/// default or the override from the settings source.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The user's own nickname
    pub nick: String,

    /// Local path of the user's own feed file
    pub twtfile: String,

    /// Public URL under which the feed is published
    pub twturl: String,

    /// Whether `follow` verifies a source before adding it
    pub check_following: bool,

    /// Whether timeline output is piped through a pager
    pub use_pager: bool,

    /// Whether fetched feeds may be cached (interpreted by the caller)
    pub use_cache: bool,

    /// Machine-readable, script-parseable output mode
    pub porcelain: bool,

    /// Whether to disclose nick and URL in the HTTP User-Agent
    pub disclose_identity: bool,

    /// Hard limit on post length in characters (0 = unlimited)
    pub character_limit: u64,

    /// Post length that triggers a warning (0 = disabled)
    pub character_warning: u64,

    /// Number of posts shown by the timeline (0 = unlimited)
    pub limit_timeline: u64,

    /// Cache staleness interval in seconds (interpreted by the caller)
    pub timeline_update_interval: u64,

    /// Network timeout in seconds
    pub timeout: f64,

    /// Timeline sort direction
    pub sorting: Sorting,

    /// Show absolute timestamps instead of relative ones
    pub use_abs_time: bool,

    /// Command run before appending a new post (empty = none)
    pub pre_tweet_hook: String,

    /// Command run after appending a new post (empty = none)
    pub post_tweet_hook: String,

    /// Followed sources: nickname to feed URL
    pub following: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nick: String::new(),
            twtfile: String::new(),
            twturl: String::new(),
            check_following: true,
            use_pager: false,
            use_cache: true,
            porcelain: false,
            disclose_identity: false,
            character_limit: 0,
            character_warning: 0,
            limit_timeline: DEFAULT_LIMIT_TIMELINE,
            timeline_update_interval: DEFAULT_UPDATE_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
            sorting: Sorting::default(),
            use_abs_time: false,
            pre_tweet_hook: String::new(),
            post_tweet_hook: String::new(),
            following: BTreeMap::new(),
        }
    }
}

/// Serialization mirror of [`Config`]; field order here is the documented
/// key order of the saved file.
#[derive(Serialize)]
struct ConfigDoc<'a> {
    twtxt: TwtxtSection<'a>,
    following: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
struct TwtxtSection<'a> {
    nick: &'a str,
    twtfile: &'a str,
    twturl: &'a str,
    check_following: bool,
    use_pager: bool,
    use_cache: bool,
    porcelain: bool,
    disclose_identity: bool,
    character_limit: u64,
    character_warning: u64,
    limit_timeline: u64,
    timeline_update_interval: u64,
    timeout: f64,
    sorting: &'static str,
    use_abs_time: bool,
    pre_tweet_hook: &'a str,
    post_tweet_hook: &'a str,
}

impl Config {
    /// Returns the default config file location: `twtxt/config` inside the
    /// platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Parses a configuration from its textual source.
    ///
    /// Absent keys and absent sections fall back to the documented
    /// defaults; an entirely missing section behaves exactly like an empty
    /// one. The first coercion failure aborts the whole load.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let root: toml::Table = toml::from_str(source)?;
        let mut config = Self::default();

        if let Some(section) = section(&root, TWTXT_SECTION)? {
            if let Some(value) = section.get("nick") {
                config.nick = coerce_string("nick", value)?;
            }
            if let Some(value) = section.get("twtfile") {
                config.twtfile = coerce_string("twtfile", value)?;
            }
            if let Some(value) = section.get("twturl") {
                config.twturl = coerce_string("twturl", value)?;
            }
            if let Some(value) = section.get("check_following") {
                config.check_following = coerce_bool("check_following", value)?;
            }
            if let Some(value) = section.get("use_pager") {
                config.use_pager = coerce_bool("use_pager", value)?;
            }
            if let Some(value) = section.get("use_cache") {
                config.use_cache = coerce_bool("use_cache", value)?;
            }
            if let Some(value) = section.get("porcelain") {
                config.porcelain = coerce_bool("porcelain", value)?;
            }
            if let Some(value) = section.get("disclose_identity") {
                config.disclose_identity = coerce_bool("disclose_identity", value)?;
            }
            if let Some(value) = section.get("character_limit") {
                config.character_limit = coerce_int("character_limit", value)?;
            }
            if let Some(value) = section.get("character_warning") {
                config.character_warning = coerce_int("character_warning", value)?;
            }
            if let Some(value) = section.get("limit_timeline") {
                config.limit_timeline = coerce_int("limit_timeline", value)?;
            }
            if let Some(value) = section.get("timeline_update_interval") {
                config.timeline_update_interval =
                    coerce_int("timeline_update_interval", value)?;
            }
            if let Some(value) = section.get("timeout") {
                config.timeout = coerce_float("timeout", value)?;
            }
            if let Some(value) = section.get("sorting") {
                let sorting = coerce_string("sorting", value)?;
                // an empty string keeps the default, anything else must be
                // a valid direction
                if !sorting.is_empty() {
                    config.sorting = sorting.parse()?;
                }
            }
            if let Some(value) = section.get("use_abs_time") {
                config.use_abs_time = coerce_bool("use_abs_time", value)?;
            }
            if let Some(value) = section.get("pre_tweet_hook") {
                config.pre_tweet_hook = coerce_string("pre_tweet_hook", value)?;
            }
            if let Some(value) = section.get("post_tweet_hook") {
                config.post_tweet_hook = coerce_string("post_tweet_hook", value)?;
            }
        }

        if let Some(section) = section(&root, FOLLOWING_SECTION)? {
            for (nick, url) in section {
                let url = coerce_string(nick, url)?;
                config.following.insert(nick.clone(), url);
            }
        }

        Ok(config)
    }

    /// Serializes the configuration to its textual source form.
    ///
    /// The output is deterministic: `[twtxt]` keys in documented order and
    /// `[following]` entries lexicographic by nickname, so repeated saves
    /// of unchanged data are byte-identical.
    pub fn serialize(&self) -> Result<String, ConfigError> {
        let doc = ConfigDoc {
            twtxt: TwtxtSection {
                nick: &self.nick,
                twtfile: &self.twtfile,
                twturl: &self.twturl,
                check_following: self.check_following,
                use_pager: self.use_pager,
                use_cache: self.use_cache,
                porcelain: self.porcelain,
                disclose_identity: self.disclose_identity,
                character_limit: self.character_limit,
                character_warning: self.character_warning,
                limit_timeline: self.limit_timeline,
                timeline_update_interval: self.timeline_update_interval,
                timeout: self.timeout,
                sorting: self.sorting.as_str(),
                use_abs_time: self.use_abs_time,
                pre_tweet_hook: &self.pre_tweet_hook,
                post_tweet_hook: &self.post_tweet_hook,
            },
            following: &self.following,
        };

        Ok(toml::to_string(&doc)?)
    }

    /// Returns the current textual value of a scalar option.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        Ok(match key {
            "nick" => self.nick.clone(),
            "twtfile" => self.twtfile.clone(),
            "twturl" => self.twturl.clone(),
            "check_following" => self.check_following.to_string(),
            "use_pager" => self.use_pager.to_string(),
            "use_cache" => self.use_cache.to_string(),
            "porcelain" => self.porcelain.to_string(),
            "disclose_identity" => self.disclose_identity.to_string(),
            "character_limit" => self.character_limit.to_string(),
            "character_warning" => self.character_warning.to_string(),
            "limit_timeline" => self.limit_timeline.to_string(),
            "timeline_update_interval" => self.timeline_update_interval.to_string(),
            // rendered through toml so `get` matches `serialize` ("5.0", not "5")
            "timeout" => Value::Float(self.timeout).to_string(),
            "sorting" => self.sorting.to_string(),
            "use_abs_time" => self.use_abs_time.to_string(),
            "pre_tweet_hook" => self.pre_tweet_hook.clone(),
            "post_tweet_hook" => self.post_tweet_hook.clone(),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        })
    }

    /// Updates a scalar option from its textual value, using the same
    /// coercion rules as [`Config::parse`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let text = Value::String(value.to_string());

        match key {
            "nick" => self.nick = value.to_string(),
            "twtfile" => self.twtfile = value.to_string(),
            "twturl" => self.twturl = value.to_string(),
            "check_following" => self.check_following = coerce_bool(key, &text)?,
            "use_pager" => self.use_pager = coerce_bool(key, &text)?,
            "use_cache" => self.use_cache = coerce_bool(key, &text)?,
            "porcelain" => self.porcelain = coerce_bool(key, &text)?,
            "disclose_identity" => self.disclose_identity = coerce_bool(key, &text)?,
            "character_limit" => self.character_limit = coerce_int(key, &text)?,
            "character_warning" => self.character_warning = coerce_int(key, &text)?,
            "limit_timeline" => self.limit_timeline = coerce_int(key, &text)?,
            "timeline_update_interval" => {
                self.timeline_update_interval = coerce_int(key, &text)?;
            }
            "timeout" => self.timeout = coerce_float(key, &text)?,
            "sorting" => self.sorting = value.parse()?,
            "use_abs_time" => self.use_abs_time = coerce_bool(key, &text)?,
            "pre_tweet_hook" => self.pre_tweet_hook = value.to_string(),
            "post_tweet_hook" => self.post_tweet_hook = value.to_string(),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }

        Ok(())
    }
}

/// Looks up a section table by name. A missing section is `None`; a key of
/// that name holding a non-table value is a type error.
fn section<'a>(root: &'a toml::Table, name: &str) -> Result<Option<&'a toml::Table>, ConfigError> {
    match root.get(name) {
        None => Ok(None),
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(_) => Err(ConfigError::FieldType {
            key: name.to_string(),
            source: ValueError::WrongType { expected: "section" },
        }),
    }
}

fn coerce_string(key: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ConfigError::FieldType {
            key: key.to_string(),
            source: ValueError::WrongType { expected: "string" },
        }),
    }
}

fn coerce_bool(key: &str, value: &Value) -> Result<bool, ConfigError> {
    let result = match value {
        Value::Boolean(b) => Ok(*b),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(ValueError::ParseBool(s.clone())),
        },
        _ => Err(ValueError::WrongType { expected: "boolean" }),
    };

    result.map_err(|source| ConfigError::FieldType {
        key: key.to_string(),
        source,
    })
}

fn coerce_int(key: &str, value: &Value) -> Result<u64, ConfigError> {
    let result = match value {
        Value::Integer(i) if *i >= 0 => Ok(u64::try_from(*i).unwrap_or_default()),
        Value::Integer(i) => Err(ValueError::Negative(*i)),
        Value::String(s) => s.trim().parse::<u64>().map_err(ValueError::from),
        _ => Err(ValueError::WrongType { expected: "integer" }),
    };

    result.map_err(|source| ConfigError::FieldType {
        key: key.to_string(),
        source,
    })
}

fn coerce_float(key: &str, value: &Value) -> Result<f64, ConfigError> {
    #[allow(clippy::cast_precision_loss)]
    let result = match value {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        Value::String(s) => s.trim().parse::<f64>().map_err(ValueError::from),
        _ => Err(ValueError::WrongType { expected: "float" }),
    };

    result.map_err(|source| ConfigError::FieldType {
        key: key.to_string(),
        source,
    })
}
