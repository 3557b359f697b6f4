// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use reel_core::bare_id;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_movie_details;
use crate::error::Result;
use crate::remote::MovieApi;
use crate::sync::MovieRepository;

use super::{fetch, open_repository};

pub async fn run(query: &str, output: OutputFormat) -> Result<()> {
    let query = normalize_query(query)?;
    let config = Config::load_default()?;
    let repo = open_repository(&config)?;
    run_impl(&repo, &query, output, &mut std::io::stdout()).await
}

/// IMDb paths such as `/title/tt0111161/` become bare ids. Anything else is
/// passed through as a search query.
pub(crate) fn normalize_query(query: &str) -> Result<String> {
    let query = query.trim();
    if query.starts_with('/') {
        return Ok(bare_id(query)?);
    }
    Ok(query.to_string())
}

/// Internal implementation that accepts a repository for testing.
pub(crate) async fn run_impl<A: MovieApi + 'static>(
    repo: &MovieRepository<A>,
    query: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let details = fetch(|cancel| repo.movie_details(query, cancel)).await?;
    match output {
        OutputFormat::Text => writeln!(out, "{}", format_movie_details(&details))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
