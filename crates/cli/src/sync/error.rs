// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::remote::ApiError;

/// Faults that end a request without a terminal envelope.
///
/// Failures a user can act on (HTTP status, connectivity, empty lookup)
/// are reported as `Status::Error` instead and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Remote fault with no user-facing message, e.g. a malformed body.
    #[error("remote error: {0}")]
    Remote(#[from] ApiError),

    /// Local store read failure.
    #[error("local store error: {0}")]
    Store(#[from] reel_core::Error),

    /// The caller's cancellation token fired.
    #[error("request cancelled")]
    Cancelled,

    /// The receiving half was dropped.
    #[error("status consumer went away")]
    ConsumerGone,

    /// The request task panicked or was aborted.
    #[error("request task failed: {0}")]
    TaskFailed(String),
}

/// Result type for request tasks.
pub type SyncResult<T> = Result<T, SyncError>;
