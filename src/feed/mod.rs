//! # Feed
//!
//! The twtxt feed document model: timestamped posts, metadata fields, and
//! the line-oriented parser that converts between the two representations.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

pub mod error;
pub mod field;
pub mod parser;

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, SubsecRound};

pub use self::{
    error::ParseError,
    field::{Field, Fields},
    parser::Document,
};
use crate::constants::POST_DELIMITER;

/// A single twtxt post: a timestamp and the message body.
///
/// The timestamp always carries an explicit UTC offset, because the offset
/// is part of the on-disk representation and must round-trip exactly. It is
/// fixed eagerly at construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    timestamp: DateTime<FixedOffset>,
    body: String,
}

impl Post {
    /// Creates a new post with the given body, timestamped now in the local
    /// timezone. Subsecond precision is dropped, matching the on-disk
    /// second-granularity convention.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().fixed_offset().trunc_subsecs(0),
            body: body.into(),
        }
    }

    /// Creates a post with an explicit timestamp, e.g. one parsed from a
    /// feed line.
    pub fn with_timestamp(timestamp: DateTime<FixedOffset>, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            body: body.into(),
        }
    }

    /// Returns the post's timestamp.
    pub const fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Returns the raw body of the post, exactly as it appeared (or will
    /// appear) after the tab delimiter.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Post {
    /// Formats the post as a twtxt feed line:
    ///
    /// ```text
    /// <yyyy>-<mm>-<dd>T<HH>:<MM>:<SS><+/-><XX>:<ZZ>\t<POST>
    /// ```
    ///
    /// Literal tabs and newlines in the body are escaped to `\t` and `\n` so
    /// the file stays strictly line-oriented (the format has no multi-line
    /// posts).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.body.replace('\n', "\\n").replace('\t', "\\t");
        write!(f, "{}{POST_DELIMITER}{body}", self.timestamp.to_rfc3339())
    }
}

/// An ordered collection of posts.
///
/// The posts are not necessarily from the same source or in any particular
/// order, but the collection can be sorted chronologically in either
/// direction. Sorting is stable: posts with equal timestamps keep their
/// pre-sort relative order, with no secondary key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed(Vec<Post>);

impl Feed {
    /// Creates an empty feed.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of posts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the feed holds no posts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a post. The feed is an append-only log by convention, so
    /// this is the only mutation besides sorting.
    pub fn push(&mut self, post: Post) {
        self.0.push(post);
    }

    /// Reports whether the post at `i` was posted before the post at `j`.
    ///
    /// Comparison is by instant, so posts with different UTC offsets compare
    /// correctly.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].timestamp() < self.0[j].timestamp()
    }

    /// Exchanges the posts at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Sorts the posts oldest-first, in place.
    pub fn sort_ascending(&mut self) {
        self.0.sort_by(|a, b| a.timestamp().cmp(&b.timestamp()));
    }

    /// Sorts the posts newest-first, in place.
    pub fn sort_descending(&mut self) {
        self.0.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    }

    /// Iterates over the posts in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.0.iter()
    }
}

impl FromIterator<Post> for Feed {
    fn from_iter<T: IntoIterator<Item = Post>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Feed {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Feed {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_post_display() {
        let post = Post::with_timestamp(ts("2016-02-03T23:05:00+01:00"), "welcome to twtxt!");
        assert_eq!(post.to_string(), "2016-02-03T23:05:00+01:00\twelcome to twtxt!");
    }

    #[test]
    fn test_post_display_escapes_controls() {
        let post = Post::with_timestamp(ts("2016-02-03T23:05:00+01:00"), "one\ntwo\tthree");
        assert_eq!(
            post.to_string(),
            "2016-02-03T23:05:00+01:00\tone\\ntwo\\tthree"
        );
    }

    #[test]
    fn test_new_post_timestamp_is_fixed() {
        let post = Post::new("hello");
        let first = post.timestamp();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(post.timestamp(), first);
        // subseconds are truncated so the timestamp survives a write/read cycle
        assert_eq!(post.timestamp().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_feed_primitives() {
        let mut feed: Feed = [
            Post::with_timestamp(ts("2016-02-04T13:30:00+01:00"), "later"),
            Post::with_timestamp(ts("2015-12-12T12:00:00+01:00"), "earlier"),
        ]
        .into_iter()
        .collect();

        assert_eq!(feed.len(), 2);
        assert!(!feed.is_empty());
        assert!(feed.less(1, 0));
        assert!(!feed.less(0, 1));

        feed.swap(0, 1);
        assert!(feed.less(0, 1));
    }

    #[test]
    fn test_sort_is_stable_across_offsets() {
        // T3, T1, T3, T5, T2 with varying offsets; the two T3 posts denote
        // the same instant and must keep their relative order.
        let mut feed: Feed = [
            Post::with_timestamp(ts("2016-01-03T12:00:00+00:00"), "t3 first"),
            Post::with_timestamp(ts("2016-01-01T13:00:00+01:00"), "t1"),
            Post::with_timestamp(ts("2016-01-03T13:00:00+01:00"), "t3 second"),
            Post::with_timestamp(ts("2016-01-05T07:00:00-05:00"), "t5"),
            Post::with_timestamp(ts("2016-01-02T12:00:00+00:00"), "t2"),
        ]
        .into_iter()
        .collect();

        feed.sort_ascending();
        let bodies: Vec<_> = feed.iter().map(Post::body).collect();
        assert_eq!(bodies, ["t1", "t2", "t3 first", "t3 second", "t5"]);

        let mut instants: Vec<_> = feed.iter().map(Post::timestamp).collect();
        let mut sorted = instants.clone();
        sorted.sort();
        assert_eq!(instants, sorted);

        feed.sort_descending();
        instants = feed.iter().map(Post::timestamp).collect();
        // ties also keep pre-sort order when sorting descending
        let bodies: Vec<_> = feed.iter().map(Post::body).collect();
        assert_eq!(bodies, ["t5", "t3 first", "t3 second", "t2", "t1"]);
        assert!(instants.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty = Feed::new();
        empty.sort_ascending();
        assert!(empty.is_empty());

        let mut single = Feed::new();
        single.push(Post::with_timestamp(ts("2016-01-01T00:00:00Z"), "only"));
        single.sort_descending();
        assert_eq!(single.len(), 1);
    }
}
