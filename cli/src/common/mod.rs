//! # dmark-subst Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from the
//! command logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: Reading and writing documents (files or standard streams).
//!

/// Utilities for filesystem and standard-stream I/O.
pub mod fs;
