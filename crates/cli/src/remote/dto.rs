// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types for the imdb8 API and their mapping onto core records.

use reel_core::{bare_id, CastMember, MovieDetails, TopMovie};
use serde::{Deserialize, Serialize};

use super::api::{ApiError, ApiResult};

/// Leading path segment of title ids.
const TITLE_PREFIX: &str = "title/";

/// Shown for a title the API returned without a name.
pub const UNTITLED: &str = "Untitled";

/// One entry of `GET /title/get-top-rated-movies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRatedEntry {
    /// Title path, e.g. `/title/tt0111161/`.
    pub id: String,
    #[serde(default)]
    pub chart_rating: Option<f64>,
}

impl TopRatedEntry {
    /// Creates an unenriched cache record from this entry.
    pub fn to_top_movie(&self) -> ApiResult<TopMovie> {
        let id = bare_id(&self.id).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(TopMovie::new(id, self.chart_rating))
    }
}

/// Body of `GET /title/find?q=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<FindResult>,
}

impl FindResponse {
    /// The canonical match: the first result that is a title.
    ///
    /// Free-text searches also return people (`/name/...`); those are
    /// skipped.
    pub fn into_first_title(self, query: &str) -> ApiResult<FindResult> {
        self.results
            .into_iter()
            .find(FindResult::is_title)
            .ok_or_else(|| ApiError::NotFound(query.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResult {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub running_time_in_minutes: Option<u32>,
    #[serde(default)]
    pub chart_rating: Option<ChartRating>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub principals: Vec<Principal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRating {
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

/// A principal cast or crew credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Person path, e.g. `/name/nm0000209/`.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub characters: Vec<String>,
}

impl Principal {
    fn into_cast_member(self) -> ApiResult<CastMember> {
        let person_id = bare_id(&self.id).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(CastMember {
            person_id,
            name: self.name,
            characters: self.characters,
        })
    }
}

impl FindResult {
    /// Whether this result is a title rather than a person.
    pub fn is_title(&self) -> bool {
        self.id.trim_start_matches('/').starts_with(TITLE_PREFIX)
    }

    /// Title and poster URL, the two fields merged into a cached record.
    pub fn enrichment(self) -> (Option<String>, Option<String>) {
        (self.title, self.image.and_then(|image| image.url))
    }

    /// Builds full details from this result.
    pub fn into_details(self) -> ApiResult<MovieDetails> {
        let id = bare_id(&self.id).map_err(|e| ApiError::Decode(e.to_string()))?;
        let title = self.title.unwrap_or_else(|| UNTITLED.to_string());
        let cast = self
            .principals
            .into_iter()
            .map(Principal::into_cast_member)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(MovieDetails {
            id,
            title,
            year: self.year,
            running_time_minutes: self.running_time_in_minutes,
            rating: self.chart_rating.and_then(|c| c.rating),
            description: self.description.and_then(|d| d.text),
            image_url: self.image.and_then(|image| image.url),
            cast,
        })
    }
}
