//! # dmark-subst Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` and the standard streams used by the
//! `filter` command: reading a document from a file or stdin, and writing the
//! filtered document to a file (creating parent directories) or stdout.
//! Every error carries the path involved.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let content = io::read_input(Some(Path::new("content/install.dmark")))?;
//! io::write_output(Some(Path::new("output/install.dmark")), &content)?;
//! ```
//!
use crate::core::error::{Result, SubstError};
use anyhow::Context;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Path argument that selects the standard streams instead of a file.
pub const STDIO_PATH: &str = "-";

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents. Fails with
/// `SubstError::FileSystem` if the path exists but is not a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(SubstError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, creating its parent directory and
/// overwriting any existing file.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("out.txt").parent()` is `Some("")`.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

fn is_stdio(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == STDIO_PATH)
}

/// # Read Input (`read_input`)
///
/// Reads a whole document from `path`, or from stdin when `path` is `None`
/// or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if !is_stdio(Some(p)) => {
            debug!("Reading input from {:?}", p);
            read_file_to_string(p)
        }
        _ => {
            debug!("Reading input from stdin");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read input from stdin")?;
            Ok(content)
        }
    }
}

/// # Write Output (`write_output`)
///
/// Writes a whole document to `path`, or to stdout when `path` is `None`
/// or `-`. Nothing is appended; the content is written exactly as given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(p) if !is_stdio(Some(p)) => write_string_to_file(p, content),
        _ => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(content.as_bytes())
                .and_then(|_| handle.flush())
                .context("Failed to write output to stdout")
        }
    }
}
