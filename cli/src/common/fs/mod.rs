//! # dmark-subst Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem and standard-stream helpers. Callers import the submodule
//! directly, e.g. `crate::common::fs::io::read_input`.
//!

/// Reading documents from files or stdin and writing them to files or stdout.
pub mod io;
