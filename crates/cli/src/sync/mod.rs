// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Data synchronization between the remote catalogue and the local store.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ spawn ┌─────────────────┐     ┌─────────────┐
//! │    caller    │──────►│ MovieRepository │────►│  MovieApi   │
//! │ (view/CLI)   │       │  (task per req) │     │   (trait)   │
//! └──────────────┘       └─────────────────┘     └─────────────┘
//!        ▲                   │          │
//!        │  StatusStream     │ Emitter  ▼
//!        └───────────────────┘    ┌─────────────┐
//!                                 │  Database   │  (top movies cache)
//!                                 └─────────────┘
//! ```
//!
//! Each request runs as one task bound to a `CancellationToken`. It
//! reports `Loading` first and exactly one terminal envelope last, unless
//! it is cancelled or hits a fault with no user-facing message.

mod error;
mod repository;
mod stream;

pub use error::{SyncError, SyncResult};
pub use repository::{MovieRepository, SyncConfig};
pub use stream::{Emitter, StatusStream, STATUS_BUFFER};
