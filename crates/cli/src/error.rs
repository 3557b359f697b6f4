// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::remote::ApiError;
use crate::sync::SyncError;

/// All possible errors that can occur in the reelrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no API key configured\n  hint: set REEL_API_KEY or add `key` under [api] in the config file")]
    MissingApiKey,

    #[error("cannot determine the state directory\n  hint: set REEL_STATE_DIR")]
    NoStateDir,

    #[error("cannot determine the config directory\n  hint: set REEL_CONFIG")]
    NoConfigDir,

    #[error("invalid IMDb id: '{0}'")]
    InvalidImdbId(String),

    /// A request ended with an error envelope. Carries its message as-is.
    #[error("{0}")]
    Fetch(String),

    #[error(transparent)]
    Remote(#[from] ApiError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for reelrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<reel_core::Error> for Error {
    fn from(e: reel_core::Error) -> Self {
        match e {
            reel_core::Error::InvalidImdbId(id) => Error::InvalidImdbId(id),
            reel_core::Error::Database(e) => Error::Database(e),
            reel_core::Error::Io(e) => Error::Io(e),
            reel_core::Error::Json(e) => Error::Json(e),
            reel_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
