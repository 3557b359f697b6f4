// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reel-core: Shared library for the reel movie catalogue
//!
//! This crate provides the movie data types, the status envelope reported
//! to presentation code, and the SQLite-backed local cache.

pub mod db;
pub mod error;
pub mod movie;
pub mod status;

pub use db::Database;
pub use error::{Error, Result};
pub use movie::{bare_id, CastMember, MovieDetails, TopMovie};
pub use status::Status;
