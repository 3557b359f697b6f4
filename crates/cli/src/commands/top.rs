// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_top_movies;
use crate::error::Result;
use crate::remote::MovieApi;
use crate::sync::MovieRepository;

use super::{fetch, open_repository};

pub async fn run(output: OutputFormat) -> Result<()> {
    let config = Config::load_default()?;
    let repo = open_repository(&config)?;
    run_impl(&repo, output, &mut std::io::stdout()).await
}

/// Internal implementation that accepts a repository for testing.
pub(crate) async fn run_impl<A: MovieApi + 'static>(
    repo: &MovieRepository<A>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let movies = fetch(|cancel| repo.top_movies(cancel)).await?;
    match output {
        OutputFormat::Text => writeln!(out, "{}", format_top_movies(&movies))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&movies)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "top_tests.rs"]
mod tests;
