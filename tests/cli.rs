//! # CLI Integration Tests
//!
//! End-to-end tests for the twtr binary. Every test runs against a
//! temporary config (via --config) and local-path feed sources, so the
//! whole suite works offline.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use twtr::Config;

/// Temporary home for a test: a config file and a twtfile.
struct TestEnv {
    dir: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a test environment with the given config, pointed at a
    /// twtfile inside the temp dir. Porcelain is forced on so output is
    /// stable to assert against.
    fn new(mut config: Config) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let config_path = dir.path().join("config");

        config.twtfile = dir.path().join("twtxt.txt").display().to_string();
        config.porcelain = true;
        fs::write(&config_path, config.serialize().unwrap()).expect("failed to write config");

        Self { dir, config_path }
    }

    fn twtr(&self) -> Command {
        let mut cmd = Command::cargo_bin("twtr").expect("twtr binary");
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    fn twtfile(&self) -> PathBuf {
        self.dir.path().join("twtxt.txt")
    }

    /// Writes a local feed file and returns its path as a source string.
    fn write_feed(&self, name: &str, lines: &[&str]) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, lines.join("\n") + "\n").expect("failed to write feed");
        path.display().to_string()
    }
}

fn feed_path(env: &TestEnv, name: &str) -> String {
    env.dir.path().join(name).display().to_string()
}

// =============================================================================
// tweet
// =============================================================================

#[test]
fn test_tweet_appends_to_twtfile() {
    let env = TestEnv::new(Config::default());

    env.twtr().args(["tweet", "first post"]).assert().success();
    env.twtr().args(["tweet", "second post"]).assert().success();

    let content = fs::read_to_string(env.twtfile()).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("\tfirst post"));
    assert!(lines[1].ends_with("\tsecond post"));
}

#[test]
fn test_tweet_line_reparses_to_same_body() {
    let env = TestEnv::new(Config::default());

    env.twtr()
        .args(["tweet", "round trip ✓"])
        .assert()
        .success();

    let content = fs::read_to_string(env.twtfile()).unwrap();
    let document = twtr::Document::parse(Some(&content)).unwrap();
    assert_eq!(document.posts.len(), 1);
    assert_eq!(document.posts.iter().next().unwrap().body(), "round trip ✓");
}

#[test]
fn test_tweet_character_limit_does_not_block_outgoing() {
    let mut config = Config::default();
    config.character_limit = 10;
    let env = TestEnv::new(config);

    env.twtr()
        .args(["tweet", "this is clearly longer than ten characters"])
        .assert()
        .success();

    let content = fs::read_to_string(env.twtfile()).unwrap();
    assert!(content.contains("this is clearly longer than ten characters"));
}

#[test]
fn test_tweet_character_warning_still_posts() {
    let mut config = Config::default();
    config.character_warning = 5;
    let env = TestEnv::new(config);

    env.twtr()
        .args(["tweet", "longer than five"])
        .assert()
        .success()
        .stderr(predicate::str::contains("character_warning"));

    assert!(env.twtfile().exists());
}

// =============================================================================
// follow / unfollow / following
// =============================================================================

#[test]
fn test_follow_following_unfollow() {
    let env = TestEnv::new(Config::default());
    let alice = env.write_feed("alice.txt", &["2016-02-03T23:05:00+01:00\thello"]);

    env.twtr()
        .args(["follow", "alice", alice.as_str()])
        .assert()
        .success();

    env.twtr()
        .arg("following")
        .assert()
        .success()
        .stdout(format!("alice\t{alice}\n"));

    env.twtr().args(["unfollow", "alice"]).assert().success();

    env.twtr()
        .arg("following")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_follow_rejects_corrupt_feed() {
    let env = TestEnv::new(Config::default());
    let bad = env.write_feed("bad.txt", &["no tab and no timestamp here"]);

    env.twtr()
        .args(["follow", "bad", bad.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid twtxt feed"));
}

#[test]
fn test_follow_missing_feed_without_check() {
    let mut config = Config::default();
    config.check_following = false;
    let env = TestEnv::new(config);
    let ghost = feed_path(&env, "missing.txt");

    env.twtr()
        .args(["follow", "ghost", ghost.as_str()])
        .assert()
        .success();
}

// =============================================================================
// timeline
// =============================================================================

fn timeline_env() -> TestEnv {
    let env = TestEnv::new(Config::default());

    let alice = env.write_feed(
        "alice.txt",
        &[
            "# nick = alice",
            "2016-02-01T11:00:00+01:00\talice one",
            "2016-02-03T11:00:00+01:00\talice two",
        ],
    );
    let bob = env.write_feed("bob.txt", &["2016-02-02T11:00:00+01:00\tbob one"]);

    env.twtr().args(["follow", "alice", alice.as_str()]).assert().success();
    env.twtr().args(["follow", "bob", bob.as_str()]).assert().success();
    env
}

#[test]
fn test_timeline_descending_order() {
    let env = timeline_env();

    let output = env.twtr().arg("timeline").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let bodies: Vec<_> = stdout
        .lines()
        .map(|line| line.split('\t').nth(2).unwrap())
        .collect();
    assert_eq!(bodies, ["alice two", "bob one", "alice one"]);
}

#[test]
fn test_timeline_ascending_and_limit() {
    let env = timeline_env();

    env.twtr()
        .args(["config", "set", "sorting", "ascending"])
        .assert()
        .success();
    env.twtr()
        .args(["config", "set", "limit_timeline", "2"])
        .assert()
        .success();

    let output = env.twtr().arg("timeline").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    // the two most recent posts, oldest of them first
    let bodies: Vec<_> = stdout
        .lines()
        .map(|line| line.split('\t').nth(2).unwrap())
        .collect();
    assert_eq!(bodies, ["bob one", "alice two"]);
}

#[test]
fn test_timeline_skips_broken_following_source() {
    let env = timeline_env();
    let missing = feed_path(&env, "gone.txt");

    // follow a source that doesn't exist (validation off for this one)
    env.twtr()
        .args(["config", "set", "check_following", "false"])
        .assert()
        .success();
    env.twtr()
        .args(["follow", "ghost", missing.as_str()])
        .assert()
        .success();

    env.twtr()
        .arg("timeline")
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost"))
        .stdout(predicate::str::contains("alice two"));
}

#[test]
fn test_timeline_reports_own_feed_parse_error_position() {
    let env = TestEnv::new(Config::default());
    fs::write(
        env.twtfile(),
        "2016-02-01T11:00:00+01:00\tfine\nbroken line\n",
    )
    .unwrap();

    env.twtr()
        .arg("timeline")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error on line 2"));
}

#[test]
fn test_timeline_shortens_incoming_posts_past_limit() {
    let env = TestEnv::new(Config::default());
    let alice = env.write_feed(
        "alice.txt",
        &["2016-02-03T23:05:00+01:00\tthis body is far past the limit"],
    );
    env.twtr().args(["follow", "alice", alice.as_str()]).assert().success();

    env.twtr()
        .args(["config", "set", "character_limit", "10"])
        .assert()
        .success();
    env.twtr()
        .args(["config", "set", "porcelain", "false"])
        .assert()
        .success();

    env.twtr()
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("this body …"))
        .stdout(predicate::str::contains("past the limit").not());
}

#[test]
fn test_timeline_with_no_feeds_is_empty() {
    let env = TestEnv::new(Config::default());

    env.twtr()
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// view
// =============================================================================

#[test]
fn test_view_followed_nick() {
    let env = timeline_env();

    let output = env.twtr().args(["view", "alice"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let bodies: Vec<_> = stdout
        .lines()
        .map(|line| line.split('\t').nth(2).unwrap())
        .collect();
    assert_eq!(bodies, ["alice two", "alice one"]);
    assert!(!stdout.contains("bob one"));
}

#[test]
fn test_view_adhoc_source_uses_declared_nick() {
    let env = TestEnv::new(Config::default());
    let carol = env.write_feed(
        "carol.txt",
        &["# nick = carol", "2016-02-03T23:05:00+01:00\thi there"],
    );

    env.twtr()
        .args(["view", carol.as_str()])
        .assert()
        .success()
        .stdout("carol\t2016-02-03T23:05:00+01:00\thi there\n");
}

#[test]
fn test_view_unreachable_source_fails() {
    let env = TestEnv::new(Config::default());
    let missing = feed_path(&env, "nowhere.txt");

    env.twtr()
        .args(["view", missing.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot fetch feed"));
}

// =============================================================================
// config
// =============================================================================

#[test]
fn test_config_get_set_roundtrip() {
    let env = TestEnv::new(Config::default());

    env.twtr()
        .args(["config", "get", "limit_timeline"])
        .assert()
        .success()
        .stdout("20\n");

    // floats print in their serialized form
    env.twtr()
        .args(["config", "get", "timeout"])
        .assert()
        .success()
        .stdout("5.0\n");

    env.twtr()
        .args(["config", "set", "nick", "buckket"])
        .assert()
        .success();

    env.twtr()
        .args(["config", "get", "nick"])
        .assert()
        .success()
        .stdout("buckket\n");
}

#[test]
fn test_config_set_rejects_bad_value() {
    let env = TestEnv::new(Config::default());

    env.twtr()
        .args(["config", "set", "sorting", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sorting"));
}

#[test]
fn test_config_show_is_deterministic() {
    let env = TestEnv::new(Config::default());

    let first = env.twtr().arg("config").assert().success();
    let second = env.twtr().arg("config").assert().success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn test_config_path_prints_override() {
    let env = TestEnv::new(Config::default());

    env.twtr()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", env.config_path.display()));
}

#[test]
fn test_missing_config_hints_quickstart() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-config");

    let mut cmd = Command::cargo_bin("twtr").unwrap();
    cmd.arg("--config")
        .arg(&missing)
        .arg("timeline")
        .assert()
        .failure()
        .stderr(predicate::str::contains("quickstart"));
}

#[test]
fn test_quickstart_refuses_existing_config() {
    let env = TestEnv::new(Config::default());

    env.twtr()
        .arg("quickstart")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
