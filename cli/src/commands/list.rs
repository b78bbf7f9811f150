//! # dmark-subst List Command
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! Implements `dmark-subst list`, which prints every available filter and the
//! placeholder tokens it substitutes.
//!
//! Example output:
//!
//! ```text
//! Available filters:
//!
//! dmark_subst
//!   <sudo-gem-install>        -> If the %command{gem install} command fails ...
//!   <sudo-gem-update-system>  -> If the %command{gem update --system} command fails ...
//! ```
//!
use crate::core::error::Result;
use crate::core::filter::{registry, Filter};
use clap::Parser;
use tracing::info;

/// Width at which replacement previews are cut off.
const PREVIEW_WIDTH: usize = 48;

/// Arguments for `dmark-subst list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print replacement text in full instead of a preview.
    #[arg(long)]
    pub full: bool,
}

/// # Handle List Command (`handle_list`)
pub fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling list command...");
    let filters = registry::available_filters();
    print!("{}", format_filter_list(&filters, args.full));
    Ok(())
}

fn format_filter_list(filters: &[Box<dyn Filter>], full: bool) -> String {
    let mut out = String::from("Available filters:\n");
    for filter in filters {
        out.push('\n');
        out.push_str(filter.identifier());
        out.push('\n');
        let placeholders = filter.placeholders();
        let token_width = placeholders.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
        for (token, replacement) in placeholders {
            let text = if full {
                replacement.to_string()
            } else {
                preview(replacement)
            };
            out.push_str(&format!("  {:<width$}  -> {}\n", token, text, width = token_width));
        }
    }
    out
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_WIDTH {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_WIDTH).collect();
    format!("{} ...", cut.trim_end())
}
