//! # dmark-subst CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behaviour of the binary: `--help`, `--version`, and the `list`
//! subcommand.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    dmark_subst_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("filter").and(predicate::str::contains("list")));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    dmark_subst_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    let dir = tempdir().unwrap();
    dmark_subst_cmd(dir.path()).assert().failure();
}

/// `list` names the filter and both of its placeholders.
#[test]
fn test_list_shows_placeholders() {
    let dir = tempdir().unwrap();
    dmark_subst_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("dmark_subst")
                .and(predicate::str::contains("<sudo-gem-install>"))
                .and(predicate::str::contains("<sudo-gem-update-system>")),
        );
}

#[test]
fn test_list_full_prints_replacement_text() {
    let dir = tempdir().unwrap();
    dmark_subst_cmd(dir.path())
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains(UPDATE_SYSTEM_TEXT));
}
