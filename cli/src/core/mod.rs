//! # dmark-subst Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core components of dmark-subst:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `filter`: The `Filter` trait, the filter registry, and the `dmark_subst` filter
//!
//! Command handlers import what they need directly:
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{Result, SubstError};
//! use crate::core::filter::{registry, FilterParams};
//! ```
//!
pub mod config;
pub mod error;
pub mod filter;
