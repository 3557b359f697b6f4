// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of [`MovieApi`] for the imdb8 API on RapidAPI.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::api::{ApiError, ApiResult, MovieApi};
use super::dto::{FindResponse, TopRatedEntry};

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

/// Connection settings for [`ImdbClient`].
#[derive(Debug, Clone)]
pub struct ImdbConfig {
    /// Base URL, without a trailing slash.
    pub base_url: String,
    /// Value of the `X-RapidAPI-Host` header.
    pub host: String,
    /// Value of the `X-RapidAPI-Key` header.
    pub api_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ImdbConfig {
    fn default() -> Self {
        ImdbConfig {
            base_url: "https://imdb8.p.rapidapi.com".to_string(),
            host: "imdb8.p.rapidapi.com".to_string(),
            api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

/// Error body shape returned by RapidAPI gateways.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pick the message reported for a non-2xx response: the `message` field of
/// a JSON body, else the reason phrase of the status.
pub(crate) fn server_message(status: StatusCode, body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
}

/// Classify a reqwest failure.
pub(crate) fn classify(e: reqwest::Error) -> ApiError {
    if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else if let Some(status) = e.status() {
        ApiError::Http {
            status: status.as_u16(),
            message: status.canonical_reason().map(str::to_string),
        }
    } else {
        ApiError::Connectivity(Some(e.to_string()))
    }
}

/// imdb8 API client backed by reqwest.
pub struct ImdbClient {
    client: Client,
    config: ImdbConfig,
}

impl ImdbClient {
    /// Create a client with the given settings.
    pub fn new(config: ImdbConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(classify)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client around an existing reqwest `Client`.
    pub fn with_client(client: Client, config: ImdbConfig) -> Self {
        ImdbClient { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(KEY_HEADER, &self.config.api_key)
            .header(HOST_HEADER, &self.config.host)
            .query(query)
            .send()
            .await
            .map_err(classify)?;

        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "request rejected");
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: server_message(status, &body),
        });
    }
    let body = response.text().await.map_err(classify)?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl MovieApi for ImdbClient {
    fn top_rated(&self) -> Pin<Box<dyn Future<Output = ApiResult<Vec<TopRatedEntry>>> + Send + '_>> {
        Box::pin(async move { self.get("/title/get-top-rated-movies", &[]).await })
    }

    fn find(
        &self,
        query: &str,
    ) -> Pin<Box<dyn Future<Output = ApiResult<FindResponse>> + Send + '_>> {
        let query = query.to_string();
        Box::pin(async move { self.get("/title/find", &[("q", query.as_str())]).await })
    }
}
