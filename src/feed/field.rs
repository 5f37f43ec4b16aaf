//! # Metadata Fields
//!
//! Key/value pairs declared in the comment lines of a twtxt feed, e.g.
//! `# nick = buckket`. Supports the community metadata extensions used by
//! Yarn.social and friends.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use crate::constants::{COMMENT_PREFIX, FIELD_SEPARATOR};

/// A single metadata key/value pair from a feed comment line.
///
/// Fields are immutable once constructed. Keys are not unique: a feed may
/// declare `follow` (or any other key) several times, and every occurrence
/// is preserved in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: String,
    value: String,
}

impl Field {
    /// Creates a new field with the given key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Extracts a field from a comment line, if it has the shape
    /// `# key = value` with a non-empty key and value.
    ///
    /// Extraction is best-effort: a comment line that doesn't match the
    /// shape is simply a plain comment, never an error.
    pub fn extract(line: &str) -> Option<Self> {
        let comment = line.strip_prefix(COMMENT_PREFIX)?;
        let (key, value) = comment.split_once(FIELD_SEPARATOR)?;

        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return None;
        }

        Some(Self::new(key, value))
    }

    /// Returns the name (or key) of the field.
    pub fn name(&self) -> &str {
        &self.key
    }

    /// Returns the value of the field.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Field {
    /// Formats the field as a metadata comment line: `# key = value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# {} = {}", self.key, self.value)
    }
}

/// An ordered collection of [`Field`] instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<Field>);

impl Fields {
    /// Creates an empty collection.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a field, preserving encounter order.
    pub fn push(&mut self, field: Field) {
        self.0.push(field);
    }

    /// Iterates over the fields in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    /// Returns all fields with the given name, in encounter order.
    pub fn search<'a: 'b, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a Field> + 'b {
        self.iter().filter(move |field| field.name() == name)
    }

    /// Returns the value of the first field with the given name, if any.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.search(name).next().map(Field::value)
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
