//! # Terminal Output
//!
//! Rendering helpers for the timeline: timestamp display (absolute or
//! relative) and optional pager support.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{IsTerminal, Write},
    process::{Command, Stdio},
};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};

/// Formats a post timestamp for display.
///
/// With `use_abs_time` the full zoned timestamp is shown; otherwise a
/// human-friendly relative form like "2 hours ago".
pub fn format_time(timestamp: DateTime<FixedOffset>, use_abs_time: bool) -> String {
    if use_abs_time {
        return timestamp.format("%Y-%m-%d %H:%M:%S %:z").to_string();
    }

    let elapsed = (Local::now().fixed_offset() - timestamp)
        .to_std()
        .unwrap_or_default();

    timeago::Formatter::new().convert(elapsed)
}

/// Displays text, piping it through a pager when requested and stdout is a
/// terminal. Falls back to plain printing if the pager cannot be launched.
pub fn display(text: &str, use_pager: bool) -> Result<()> {
    if !use_pager || !std::io::stdout().is_terminal() {
        print!("{text}");
        return Ok(());
    }

    let pager = std::env::var("PAGER").unwrap_or_else(|_| "less -R".to_string());
    let mut parts = pager.split_whitespace();
    let Some(program) = parts.next() else {
        print!("{text}");
        return Ok(());
    };

    let child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn();

    let Ok(mut child) = child else {
        print!("{text}");
        return Ok(());
    };

    if let Some(stdin) = child.stdin.as_mut() {
        // a pager quit early (e.g. `q` in less) closes the pipe, which is fine
        let _ = stdin.write_all(text.as_bytes());
    }

    child.wait().context("Failed to wait for pager")?;
    Ok(())
}
