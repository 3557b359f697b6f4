// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Movie data types: cached top-rated records and uncached details.
//!
//! IMDb hands out identifiers as paths (`/title/tt0111161/`,
//! `/name/nm0000209/`). Every type here stores the bare id; use
//! [`bare_id`] when mapping wire data.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path segments that may precede an id in an IMDb path.
const ID_KINDS: [&str; 2] = ["title", "name"];

/// Extract the bare identifier from an IMDb path.
///
/// Accepts `/title/tt0111161/`, `title/tt0111161` and `tt0111161`.
pub fn bare_id(raw: &str) -> Result<String> {
    let segments: Vec<&str> = raw.trim().split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [id] if !ID_KINDS.contains(id) => Ok((*id).to_string()),
        [kind, id] if ID_KINDS.contains(kind) => Ok((*id).to_string()),
        _ => Err(Error::InvalidImdbId(raw.to_string())),
    }
}

/// A top-rated movie as stored in the local cache.
///
/// Created from the bulk listing with only `id` and `rating`, then
/// enriched with `title` and `image_url` from a per-item lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMovie {
    pub id: String,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
}

impl TopMovie {
    /// Creates an unenriched record from a listing entry.
    pub fn new(id: String, rating: Option<f64>) -> Self {
        TopMovie {
            id,
            title: None,
            image_url: None,
            rating,
        }
    }

    /// Merges the enrichment fields from a lookup result.
    pub fn enrich(&mut self, title: Option<String>, image_url: Option<String>) {
        self.title = title;
        self.image_url = image_url;
    }
}

/// A credited person on a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub person_id: String,
    pub name: String,
    /// Characters played, in billing order.
    pub characters: Vec<String>,
}

impl CastMember {
    /// The character shown next to the name in listings.
    pub fn lead_character(&self) -> Option<&str> {
        self.characters.first().map(String::as_str)
    }
}

/// Full movie details. Built fresh for every request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
    pub running_time_minutes: Option<u32>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub cast: Vec<CastMember>,
}

#[cfg(test)]
#[path = "movie_tests.rs"]
mod tests;
