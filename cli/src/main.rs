//! # dmark-subst Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the dmark-subst CLI, a content filter for documentation
//! builds. It expands placeholders such as `<sudo-gem-install>` in DMark
//! sources into their standard boilerplate text.
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! Logs go to stderr so that filtered content on stdout stays clean.
//!
//! ## Examples
//!
//! ```bash
//! # Filter a document to stdout
//! dmark-subst filter content/install.dmark
//!
//! # Show what the filters replace, with debug logging
//! dmark-subst -vv list
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (filter, list)
mod common; // Shared I/O utilities
mod core; // Errors, configuration, filters

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dmark-subst",
    about = "Expands boilerplate placeholders in DMark documentation sources",
    long_about = "Runs documentation content through a substitution filter.\n\
                  The default `dmark_subst` filter replaces <sudo-gem-install> and\n\
                  <sudo-gem-update-system> with the standard RubyGems sudo warning.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the project `.dmark-subst.toml`.
    #[arg(long, global = true, env = "DMARK_SUBST_CONFIG")]
    config: Option<PathBuf>,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "f")]
    Filter(commands::filter::FilterArgs),
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Filter(args) => commands::filter::handle_filter(args, cli.config.as_deref()),
        Commands::List(args) => commands::list::handle_list(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
