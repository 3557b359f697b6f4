// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use reel_core::Database;
use serde::Serialize;

use crate::cli::{CacheCommand, OutputFormat};
use crate::config::Config;
use crate::error::Result;

use super::open_db;

#[derive(Debug, Serialize)]
struct CacheStatus {
    path: PathBuf,
    count: usize,
    cached_at: Option<DateTime<Utc>>,
}

/// Execute a cache subcommand.
pub fn run(cmd: CacheCommand) -> Result<()> {
    let config = Config::load_default()?;
    let path = config.db_path()?;
    let db = open_db(&config)?;
    let mut out = std::io::stdout();
    match cmd {
        CacheCommand::Status { output } => run_status(&db, &path, output, &mut out),
        CacheCommand::Clear => run_clear(&db, &mut out),
    }
}

pub(crate) fn run_status(
    db: &Database,
    path: &Path,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let status = CacheStatus {
        path: path.to_path_buf(),
        count: db.count_top_movies()?,
        cached_at: db.cached_at()?,
    };

    match output {
        OutputFormat::Text => {
            writeln!(out, "Path: {}", status.path.display())?;
            writeln!(out, "Top movies: {}", status.count)?;
            match status.cached_at {
                Some(at) => writeln!(out, "Cached at: {}", at.format("%Y-%m-%d %H:%M"))?,
                None => writeln!(out, "Cached at: never")?,
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;
        }
    }
    Ok(())
}

pub(crate) fn run_clear(db: &Database, out: &mut impl Write) -> Result<()> {
    let removed = db.clear_top_movies()?;
    tracing::debug!(removed, "cleared cache");
    let noun = if removed == 1 { "movie" } else { "movies" };
    writeln!(out, "Cleared {} cached {}.", removed, noun)?;
    Ok(())
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
