//! # dmark-subst Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the subcommands of the dmark-subst CLI. Each module defines its
//! own `clap` arguments struct and a `handle_*` function that `main.rs`
//! dispatches to.
//!
//! - `filter`: Run a document through a filter
//! - `list`: Show available filters and their placeholders
//!

/// `dmark-subst filter`: substitutes placeholders in one document.
pub mod filter;
/// `dmark-subst list`: prints the filter registry.
pub mod list;
