// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status streams: a request task plus the channel it reports through.

use std::future::Future;

use reel_core::Status;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::error::{SyncError, SyncResult};

/// Envelopes buffered before the task waits for the consumer.
pub const STATUS_BUFFER: usize = 8;

/// Sending half of a status stream.
///
/// `success` and `error` consume the emitter, so nothing can follow a
/// terminal envelope.
pub struct Emitter<T> {
    tx: mpsc::Sender<Status<T>>,
}

impl<T> Emitter<T> {
    /// Report that work is in progress.
    pub async fn loading(&self) -> SyncResult<()> {
        self.send(Status::Loading).await
    }

    /// Report the result and close the stream.
    pub async fn success(self, data: T) -> SyncResult<()> {
        self.send(Status::Success(data)).await
    }

    /// Report a failure and close the stream.
    pub async fn error(self, message: String) -> SyncResult<()> {
        self.send(Status::Error(message)).await
    }

    async fn send(&self, status: Status<T>) -> SyncResult<()> {
        self.tx
            .send(status)
            .await
            .map_err(|_| SyncError::ConsumerGone)
    }
}

/// Receiving half of a status stream, owning the request task.
pub struct StatusStream<T> {
    rx: mpsc::Receiver<Status<T>>,
    handle: JoinHandle<SyncResult<()>>,
}

impl<T: Send + 'static> StatusStream<T> {
    /// Spawn `work` on the runtime, bound to `cancel`.
    ///
    /// Cancelling the token abandons the task wherever it is suspended;
    /// the stream then ends without a terminal envelope.
    pub fn spawn<F, Fut>(cancel: CancellationToken, work: F) -> Self
    where
        F: FnOnce(Emitter<T>) -> Fut,
        Fut: Future<Output = SyncResult<()>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(STATUS_BUFFER);
        let work = work(Emitter { tx });

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!("request cancelled");
                    Err(SyncError::Cancelled)
                }
                result = work => result,
            }
        });

        StatusStream { rx, handle }
    }
}

impl<T> StatusStream<T> {
    /// Wait for the next envelope. Returns `None` once the stream has ended.
    pub async fn next(&mut self) -> Option<Status<T>> {
        self.rx.recv().await
    }

    /// Read every remaining envelope, then wait for the task.
    pub async fn drain(mut self) -> (Vec<Status<T>>, SyncResult<()>) {
        let mut seen = Vec::new();
        while let Some(status) = self.rx.recv().await {
            seen.push(status);
        }
        let outcome = join(self.handle).await;
        (seen, outcome)
    }

    /// Discard remaining envelopes and return the task outcome.
    pub async fn finish(self) -> SyncResult<()> {
        self.drain().await.1
    }
}

async fn join(handle: JoinHandle<SyncResult<()>>) -> SyncResult<()> {
    handle
        .await
        .map_err(|e| SyncError::TaskFailed(e.to_string()))?
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
