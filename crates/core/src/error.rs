// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for reel-core operations.

use thiserror::Error;

/// All possible errors that can occur in reel-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid IMDb id: '{0}'\n  hint: expected a path like /title/tt0111161/ or a bare id")]
    InvalidImdbId(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for reel-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
