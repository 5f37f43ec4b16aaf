//! # Tweet Hooks
//!
//! Runs the user's configured pre/post tweet commands, e.g. to pull the
//! twtfile from a server before appending and push it back afterwards.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::process::Command;

use anyhow::{Context, Result};

use crate::constants::TWTFILE_PLACEHOLDER;

/// Runs a hook command with `{twtfile}` expanded to the given path.
///
/// An empty hook is a no-op. The command string is split shell-style, so
/// quoted arguments survive intact. A hook that cannot be parsed, cannot be
/// launched, or exits non-zero is an error; callers decide whether that
/// aborts the surrounding operation.
pub fn run(hook: &str, twtfile: &str) -> Result<()> {
    if hook.is_empty() {
        return Ok(());
    }

    let expanded = hook.replace(TWTFILE_PLACEHOLDER, twtfile);
    let parts = shlex::split(&expanded)
        .with_context(|| format!("Invalid hook command: {expanded}"))?;

    let (program, args) = parts
        .split_first()
        .context("Empty hook command")?;

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run hook: {expanded}"))?;

    if !status.success() {
        anyhow::bail!("Hook exited with error: {status}");
    }

    Ok(())
}
