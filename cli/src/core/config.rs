//! # dmark-subst Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges, and validates the optional TOML configuration
//! that selects the default filter and its default parameters.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` or `DMARK_SUBST_CONFIG`
//! 2. Project-specific `.dmark-subst.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/dmark-subst/config.toml`
//! 4. Default values defined in the code
//!
//! An explicit file replaces the project file; it is still layered over the
//! user file.
//!
//! ## Examples
//!
//! ```toml
//! [filter]
//! identifier = "dmark_subst"
//!
//! [filter.params]
//! site = "guides"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let filter = registry::find_filter(&cfg.filter.identifier)?;
//! ```
//!
use crate::core::error::{Result, SubstError};
use crate::core::filter::{registry, FilterParams};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Settings for the `[filter]` table.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Filter used when `--filter` is not given.
    #[serde(default = "default_filter_identifier")]
    pub identifier: String,
    /// Parameters passed to the filter; `-p KEY=VALUE` overrides entries.
    #[serde(default)]
    pub params: FilterParams,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            identifier: default_filter_identifier(),
            params: FilterParams::new(),
        }
    }
}

fn default_filter_identifier() -> String {
    registry::DEFAULT_FILTER.to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".dmark-subst.toml";

/// # Load Configuration (`load_config`)
///
/// Loads and merges all configuration sources, then validates the result.
///
/// ## Arguments
///
/// * `explicit_path` - Path from `--config` / `DMARK_SUBST_CONFIG`, if any.
///   `~` is expanded. The file must exist.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let override_config = match explicit_path {
        Some(path) => Some(load_explicit_config(path)?),
        None => load_project_config()?,
    };
    let merged_config = merge_configs(user_config.unwrap_or_default(), override_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_explicit_config(path: &Path) -> Result<Config> {
    let expanded = expand_path(path);
    if !expanded.is_file() {
        return Err(anyhow!(SubstError::Config(format!(
            "Configuration file '{}' does not exist or is not a file.",
            expanded.display()
        ))));
    }
    info!("Loading configuration from: {}", expanded.display());
    load_config_from_path(&expanded)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "DmarkSubst", "dmark-subst") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.dmark-subst.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.filter.identifier = if project_cfg.filter.identifier != default_filter_identifier() {
        project_cfg.filter.identifier
    } else {
        user.filter.identifier
    };
    // Key-wise: project entries win, user-only entries survive.
    merged.filter.params = user.filter.params;
    merged.filter.params.extend(project_cfg.filter.params);
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let identifier = &config.filter.identifier;
    if identifier.trim().is_empty() {
        return Err(anyhow!(SubstError::Config(
            "filter.identifier cannot be empty.".to_string()
        )));
    }
    if !registry::is_registered(identifier) {
        return Err(anyhow!(SubstError::Config(format!(
            "filter.identifier '{}' does not name an available filter.",
            identifier
        ))));
    }
    if config.filter.params.keys().any(|k| k.is_empty()) {
        return Err(anyhow!(SubstError::Config(
            "filter.params cannot contain an empty key.".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
