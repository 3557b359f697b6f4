// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View state driven by status streams.

use reel_core::Status;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::sync::{StatusStream, SyncResult};

/// Shown when a failure carries no message.
pub const UNEXPECTED_ERROR: &str = "unexpected error";

/// What a screen renders: a spinner, the data, or an error message.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub is_loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState {
            is_loading: false,
            data: None,
            error: None,
        }
    }
}

impl<T> ViewState<T> {
    /// Replace the whole state with the one `status` describes.
    pub fn apply(&mut self, status: Status<T>) {
        *self = match status {
            Status::Loading => ViewState {
                is_loading: true,
                ..ViewState::default()
            },
            Status::Success(data) => ViewState {
                data: Some(data),
                ..ViewState::default()
            },
            Status::Error(message) => {
                let message = if message.is_empty() {
                    UNEXPECTED_ERROR.to_string()
                } else {
                    message
                };
                ViewState {
                    error: Some(message),
                    ..ViewState::default()
                }
            }
        };
    }
}

/// Feed every envelope of `stream` into a fresh [`ViewState`], calling
/// `on_change` after each one. Returns the final state and the task outcome.
pub async fn observe<T, F>(
    mut stream: StatusStream<T>,
    mut on_change: F,
) -> (ViewState<T>, SyncResult<()>)
where
    F: FnMut(&ViewState<T>),
{
    let mut state = ViewState::default();
    while let Some(status) = stream.next().await {
        state.apply(status);
        on_change(&state);
    }
    (state, stream.finish().await)
}

/// Owner of the requests started for one screen.
///
/// Dropping the screen cancels everything started through [`Screen::token`].
pub struct Screen {
    token: CancellationToken,
    _guard: DropGuard,
}

impl Screen {
    pub fn new() -> Self {
        let token = CancellationToken::new();
        Screen {
            _guard: token.clone().drop_guard(),
            token,
        }
    }

    /// Token for a request bound to this screen.
    pub fn token(&self) -> CancellationToken {
        self.token.child_token()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
