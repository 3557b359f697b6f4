// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote movie database client.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  MovieRepository │────►│  MovieApi   │────►│  imdb8 API  │
//! │   (sync policy)  │◄────│   (trait)   │◄────│ (RapidAPI)  │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The [`MovieApi`] trait is the seam: [`ImdbClient`] talks HTTP, tests
//! inject a scripted mock.

mod api;
mod dto;
mod imdb;

pub use api::{ApiError, ApiResult, MovieApi, CONNECTIVITY_FALLBACK, PROTOCOL_FALLBACK};
pub use dto::{
    ChartRating, Description, FindResponse, FindResult, Image, Principal, TopRatedEntry,
};
pub use imdb::{ImdbClient, ImdbConfig};

#[cfg(test)]
pub(crate) mod mock;
