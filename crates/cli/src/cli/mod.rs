// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "reel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse top-rated movies and movie details from IMDb, with a local cache")]
#[command(
    long_about = "Browse top-rated movies and movie details from IMDb, with a local cache.\n\n\
    The top-rated list is fetched once and then served from the cache until \
    'reel cache clear' is run. Details are always fetched fresh."
)]
pub struct Cli {
    /// Show debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the top-rated movies
    #[command(after_help = "\
Examples:
  reel top            Show the cached list, fetching it on first use
  reel top -o json    Print the list as JSON")]
    Top {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show details and cast for a movie
    #[command(after_help = "\
Examples:
  reel show tt0111161             Look up by IMDb id
  reel show /title/tt0111161/     IMDb paths are accepted too
  reel show \"the godfather\"       Look up the best match for a title")]
    Show {
        /// IMDb id, IMDb path or free-text title
        #[arg(value_parser = non_empty_string)]
        query: String,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Inspect or clear the local cache
    #[command(subcommand)]
    Cache(CacheCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Local cache commands.
#[derive(Subcommand)]
pub enum CacheCommand {
    /// Show where the cache lives and what it holds
    Status {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Empty the cache so the next 'reel top' refetches
    Clear,
}

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration (API key masked)
    Show,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
