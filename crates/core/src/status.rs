// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status envelopes reported to consumers of a data request.
//!
//! A request produces zero or more [`Status::Loading`] values followed by
//! exactly one terminal value, either [`Status::Success`] or
//! [`Status::Error`].

use serde::Serialize;

/// Progress of an asynchronous data request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Status<T> {
    /// Work is in progress.
    Loading,
    /// The request completed with data.
    Success(T),
    /// The request failed with a user-facing message.
    Error(String),
}

impl<T> Status<T> {
    /// Returns true for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Loading)
    }

    /// Returns the payload of a `Success`.
    pub fn data(&self) -> Option<&T> {
        match self {
            Status::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the message of an `Error`.
    pub fn error(&self) -> Option<&str> {
        match self {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
