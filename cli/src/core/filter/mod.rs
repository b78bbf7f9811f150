//! # dmark-subst Filters
//!
//! File: cli/src/core/filter/mod.rs
//!
//! ## Overview
//!
//! A filter takes the content of one document and returns transformed content.
//! Filters are chosen by a short identifier (e.g. `dmark_subst`) and may be
//! handed a map of string parameters, mirroring how a site build tool invokes
//! its content filters.
//!
//! ## Architecture
//!
//! - `Filter`: The trait every filter implements.
//! - `FilterParams`: Parameters passed to `Filter::run`.
//! - `registry`: Lookup of filters by identifier.
//! - `sudo_gem`: The `dmark_subst` filter, which expands the RubyGems `sudo`
//!   warning placeholders.
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::filter::{registry, FilterParams};
//!
//! let filter = registry::find_filter("dmark_subst")?;
//! let output = filter.run("Run it. <sudo-gem-install>", &FilterParams::new());
//! ```
//!
use std::collections::HashMap;

pub mod registry;
pub mod sudo_gem;

/// Parameters passed to a filter invocation.
pub type FilterParams = HashMap<String, String>;

/// A content filter selectable by identifier.
pub trait Filter {
    /// The identifier the filter is registered under.
    fn identifier(&self) -> &'static str;

    /// The `(token, replacement)` pairs this filter substitutes.
    fn placeholders(&self) -> Vec<(&'static str, &'static str)>;

    /// Transforms `content`. Must not fail; content the filter does not
    /// recognise is returned unchanged.
    fn run(&self, content: &str, params: &FilterParams) -> String;
}
