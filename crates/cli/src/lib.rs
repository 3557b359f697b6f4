// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reelrs - A cache-first client for the IMDb movie catalogue.
//!
//! This crate provides the functionality behind the `reel` CLI tool: it
//! lists top-rated movies and shows movie details, caching the top-rated
//! list in a local SQLite database.
//!
//! # Main Components
//!
//! - [`remote`] - HTTP client for the imdb8 API behind the [`remote::MovieApi`] trait
//! - [`sync`] - Cache-or-fetch policy reporting through status streams
//! - [`view`] - View state driven by status streams
//! - [`Config`] - User configuration (API key, limits, cache location)
//! - [`Error`] - Error types for all operations
//!
//! # Fetching
//!
//! ```rust,ignore
//! use reelrs::remote::ImdbClient;
//! use reelrs::{Config, MovieRepository};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = Config::load_default()?;
//! let api = ImdbClient::new(config.imdb_config()?)?;
//! let db = reel_core::Database::open(&config.db_path()?)?;
//! let repo = MovieRepository::new(api, db, config.sync_config());
//! let mut stream = repo.top_movies(CancellationToken::new());
//! while let Some(status) = stream.next().await {
//!     println!("{status:?}");
//! }
//! stream.finish().await?;
//! ```

mod cli;
mod commands;
mod display;
mod env;
pub mod logging;

pub mod config;
pub mod error;
pub mod remote;
pub mod sync;
pub mod view;

pub use cli::{CacheCommand, Cli, Command, ConfigCommand, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use sync::{MovieRepository, StatusStream};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub async fn run(command: Command) -> Result<()> {
    match command {
        Command::Top { output } => commands::top::run(output).await,
        Command::Show { query, output } => commands::show::run(&query, output).await,
        Command::Cache(cmd) => commands::cache::run(cmd),
        Command::Config(cmd) => commands::config::run(cmd),
    }
}
