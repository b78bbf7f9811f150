//! # dmark-subst Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout dmark-subst. Specific,
//! matchable failures are variants of `SubstError`; everything else flows
//! through `anyhow` so callers can attach context as errors propagate.
//!
//! ## Architecture
//!
//! - `SubstError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! let filter = registry::find_filter("dmark_subst")?;
//!
//! // Recognise a specific failure further up
//! match result {
//!     Err(e) if e.downcast_ref::<SubstError>().map_or(false, |se| matches!(se, SubstError::UnknownFilter { .. })) => {
//!         eprintln!("Try `dmark-subst list`.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the dmark-subst application.
#[derive(Error, Debug)]
pub enum SubstError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Unknown filter '{name}'. Run `dmark-subst list` to see available filters.")]
    UnknownFilter { name: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
