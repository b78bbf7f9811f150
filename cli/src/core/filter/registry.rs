//! # dmark-subst Filter Registry
//!
//! File: cli/src/core/filter/registry.rs
//!
//! ## Overview
//!
//! Resolves filter identifiers (from the command line or configuration) to
//! filter instances. New filters are added to `available_filters`.
//!
use super::sudo_gem::SudoGemFilter;
use super::Filter;
use crate::core::error::{Result, SubstError};
use tracing::debug;

/// Identifier used when neither the command line nor configuration names a filter.
pub const DEFAULT_FILTER: &str = super::sudo_gem::IDENTIFIER;

/// Returns every registered filter, sorted by identifier.
pub fn available_filters() -> Vec<Box<dyn Filter>> {
    let mut filters: Vec<Box<dyn Filter>> = vec![Box::new(SudoGemFilter)];
    filters.sort_by(|a, b| a.identifier().cmp(b.identifier()));
    filters
}

/// # Find Filter (`find_filter`)
///
/// Looks up the filter registered under `identifier`.
///
/// ## Errors
///
/// Returns `SubstError::UnknownFilter` if no filter has that identifier.
pub fn find_filter(identifier: &str) -> Result<Box<dyn Filter>> {
    debug!("Looking up filter '{}'", identifier);
    available_filters()
        .into_iter()
        .find(|f| f.identifier() == identifier)
        .ok_or_else(|| {
            SubstError::UnknownFilter {
                name: identifier.to_string(),
            }
            .into()
        })
}

/// True if a filter is registered under `identifier`.
pub fn is_registered(identifier: &str) -> bool {
    available_filters()
        .iter()
        .any(|f| f.identifier() == identifier)
}
