// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The remote client contract and its error taxonomy.

use std::future::Future;
use std::pin::Pin;

use super::dto::{FindResponse, TopRatedEntry};

/// Message used when a protocol failure carries no message of its own.
pub const PROTOCOL_FALLBACK: &str = "unexpected protocol error: wrong return code from HTTP";

/// Message used when a connectivity failure carries no message of its own.
pub const CONNECTIVITY_FALLBACK: &str =
    "unexpected connectivity error: check your internet connection";

/// Error type for remote operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{}", .message.as_deref().unwrap_or(PROTOCOL_FALLBACK))]
    Http { status: u16, message: Option<String> },

    /// The server could not be reached.
    #[error("{}", .0.as_deref().unwrap_or(CONNECTIVITY_FALLBACK))]
    Connectivity(Option<String>),

    /// A lookup returned an empty result list.
    #[error("no results found for '{0}'")]
    NotFound(String),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing message for the failure kinds reported through a status
    /// envelope. Returns `None` for faults that are not reported that way.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Http { .. } | ApiError::Connectivity(_) | ApiError::NotFound(_) => {
                Some(self.to_string())
            }
            ApiError::Decode(_) => None,
        }
    }
}

/// Result type for remote operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Read-only movie database operations.
///
/// This trait abstracts over the HTTP client, allowing for easy testing
/// with mock implementations.
pub trait MovieApi: Send + Sync {
    /// List the top-rated movies in ranking order.
    fn top_rated(&self) -> Pin<Box<dyn Future<Output = ApiResult<Vec<TopRatedEntry>>> + Send + '_>>;

    /// Look up titles matching an id or free-text query.
    fn find(
        &self,
        query: &str,
    ) -> Pin<Box<dyn Future<Output = ApiResult<FindResponse>> + Send + '_>>;
}
