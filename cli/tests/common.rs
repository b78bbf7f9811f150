//! # dmark-subst CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is its own test crate and pulls this in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// The `gem install` warning as the filter inserts it.
pub const INSTALL_TEXT: &str = "If the %command{gem install} command fails with a permission error, you likely have to prefix the command with %kbd{sudo}. Do not use %command{sudo} until you have tried the command without it; using %command{sudo} when not appropriate will damage your RubyGems installation.";

/// The `gem update --system` warning as the filter inserts it.
pub const UPDATE_SYSTEM_TEXT: &str = "If the %command{gem update --system} command fails with a permission error, you likely have to prefix the command with %kbd{sudo}. Do not use %command{sudo} until you have tried the command without it; using %command{sudo} when not appropriate will damage your RubyGems installation.";

/// # Get dmark-subst Command (`dmark_subst_cmd`)
///
/// Returns a `Command` for the compiled `dmark-subst` binary, run from
/// `workdir` with configuration lookup isolated from the host: the user
/// config directory points into `workdir` and `DMARK_SUBST_CONFIG` is unset.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn dmark_subst_cmd(workdir: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("dmark-subst").expect("Failed to find dmark-subst binary for testing");
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".xdg-config"))
        .env_remove("DMARK_SUBST_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
