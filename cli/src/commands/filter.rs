//! # dmark-subst Filter Command
//!
//! File: cli/src/commands/filter.rs
//!
//! ## Overview
//!
//! Implements `dmark-subst filter`, which runs one document through a filter.
//! The document is read from a file or stdin and written to a file or stdout,
//! so the command can sit in a build step or a shell pipeline.
//!
//! ## Architecture
//!
//! 1. Load configuration (explicit file, project file, user file, defaults)
//! 2. Choose the filter: `--filter`, else `filter.identifier`, else `dmark_subst`
//! 3. Merge `filter.params` with `-p KEY=VALUE` pairs (command line wins)
//! 4. Read, filter, and write the document
//!
//! ## Examples
//!
//! ```bash
//! # Filter a file to stdout
//! dmark-subst filter content/install.dmark
//!
//! # Filter stdin into a file
//! cat content/install.dmark | dmark-subst filter -o output/install.dmark
//! ```
//!
use crate::common::fs::io;
use crate::core::config::{self, Config};
use crate::core::error::{Result, SubstError};
use crate::core::filter::{registry, FilterParams};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # Filter Arguments (`FilterArgs`)
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Document to filter. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Where to write the result. Writes stdout when omitted or `-`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Filter identifier. Overrides `filter.identifier` from configuration.
    #[arg(short, long = "filter")]
    pub filter: Option<String>,

    /// Filter parameter as KEY=VALUE. May be repeated.
    #[arg(short = 'p', long = "param", value_parser = parse_key_val, action = clap::ArgAction::Append)]
    pub params: Vec<(String, String)>,
}

/// # Parse Key-Value Pair (`parse_key_val`)
///
/// Splits `KEY=VALUE` at the first `=`. The key is trimmed and must not be
/// empty; the value is kept as given (it may itself contain `=`).
fn parse_key_val(s: &str) -> Result<(String, String)> {
    let (key, value) = s.split_once('=').ok_or_else(|| {
        anyhow!(SubstError::ArgumentParsing(format!(
            "Invalid parameter format: '{}'. Expected format: KEY=VALUE",
            s
        )))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!(SubstError::ArgumentParsing(format!(
            "Invalid parameter '{}': key cannot be empty",
            s
        ))));
    }
    Ok((key.to_string(), value.to_string()))
}

/// # Handle Filter Command (`handle_filter`)
///
/// ## Errors
///
/// Fails if configuration cannot be loaded, the filter identifier is unknown,
/// or the input cannot be read / output cannot be written. Nothing is written
/// when the filter cannot be resolved.
pub fn handle_filter(args: FilterArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling filter command...");
    let cfg = config::load_config(config_path).context("Failed to load dmark-subst configuration")?;

    let identifier = select_identifier(args.filter.as_deref(), &cfg);
    let filter = registry::find_filter(identifier)?;
    let params = build_params(&cfg, args.params);
    debug!("Using filter '{}' with params {:?}", identifier, params);

    let content = io::read_input(args.input.as_deref())?;
    let filtered = filter.run(&content, &params);
    io::write_output(args.output.as_deref(), &filtered)?;

    info!(
        "Filtered {} byte(s) into {} byte(s) with '{}'",
        content.len(),
        filtered.len(),
        identifier
    );
    Ok(())
}

fn select_identifier<'a>(cli_filter: Option<&'a str>, cfg: &'a Config) -> &'a str {
    cli_filter.unwrap_or(&cfg.filter.identifier)
}

fn build_params(cfg: &Config, cli_params: Vec<(String, String)>) -> FilterParams {
    let mut params = cfg.filter.params.clone();
    params.extend(cli_params);
    params
}
