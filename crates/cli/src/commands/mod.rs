// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod cache;
pub mod config;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod top;

use is_terminal::IsTerminal;
use reel_core::Database;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::remote::ImdbClient;
use crate::sync::{MovieRepository, StatusStream, SyncError};
use crate::view::{observe, Screen, ViewState, UNEXPECTED_ERROR};

/// Helper to open the cache database named by the config.
pub fn open_db(config: &Config) -> Result<Database> {
    let path = config.db_path()?;
    tracing::debug!(path = %path.display(), "opening cache");
    Ok(Database::open(&path)?)
}

/// Build a repository backed by the live API and the configured cache.
pub fn open_repository(config: &Config) -> Result<MovieRepository<ImdbClient>> {
    let api = ImdbClient::new(config.imdb_config()?)?;
    let db = open_db(config)?;
    Ok(MovieRepository::new(api, db, config.sync_config()))
}

/// Run one request to completion on a fresh screen and return its data.
///
/// Ctrl-C drops the screen, which cancels the request.
pub async fn fetch<T, F>(start: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(CancellationToken) -> StatusStream<T>,
{
    let screen = Screen::new();
    let stream = start(screen.token());

    let (state, outcome) = tokio::select! {
        result = observe(stream, loading_indicator()) => result,
        _ = tokio::signal::ctrl_c() => return Err(SyncError::Cancelled.into()),
    };
    outcome?;
    into_data(state)
}

/// The data of a settled view, or its error message as an [`Error::Fetch`].
pub(crate) fn into_data<T>(state: ViewState<T>) -> Result<T> {
    match (state.data, state.error) {
        (Some(data), _) => Ok(data),
        (None, Some(message)) => Err(Error::Fetch(message)),
        (None, None) => Err(Error::Fetch(UNEXPECTED_ERROR.to_string())),
    }
}

/// Prints `Loading...` on stderr while the latest envelope is `Loading`.
/// Does nothing when stderr is not a terminal.
fn loading_indicator<T>() -> impl FnMut(&ViewState<T>) {
    let interactive = std::io::stderr().is_terminal();
    let mut shown = false;
    move |state| {
        if !interactive || state.is_loading == shown {
            return;
        }
        if state.is_loading {
            eprint!("Loading...");
        } else {
            eprint!("\r\x1b[2K");
        }
        shown = state.is_loading;
    }
}
