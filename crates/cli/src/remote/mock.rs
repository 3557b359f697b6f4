// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted [`MovieApi`] for tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use super::api::{ApiError, ApiResult, MovieApi};
use super::dto::{FindResponse, FindResult, Image, TopRatedEntry};

/// A canned reply.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Http(u16, Option<String>),
    Offline(Option<String>),
    Malformed(String),
    /// Never completes.
    Hang,
}

impl<T> Reply<T> {
    async fn resolve(self) -> ApiResult<T> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Http(status, message) => Err(ApiError::Http { status, message }),
            Reply::Offline(message) => Err(ApiError::Connectivity(message)),
            Reply::Malformed(reason) => Err(ApiError::Decode(reason)),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// Mock remote client. Lookups for unscripted queries return no results.
pub struct MockApi {
    top_rated: Mutex<Reply<Vec<TopRatedEntry>>>,
    finds: Mutex<HashMap<String, Reply<FindResponse>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi {
            top_rated: Mutex::new(Reply::Ok(Vec::new())),
            finds: Mutex::new(HashMap::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a top-rated listing of `count` movies, each with a lookup.
    pub fn with_catalogue(count: usize) -> Self {
        let api = MockApi::new();
        let listing: Vec<TopRatedEntry> = (1..=count)
            .map(|n| TopRatedEntry {
                id: format!("/title/{}/", title_id(n)),
                chart_rating: Some(9.5 - n as f64 / 100.0),
            })
            .collect();
        for n in 1..=count {
            api.set_find(
                &title_id(n),
                Reply::Ok(find_response(&title_id(n), &format!("Movie {n}"))),
            );
        }
        api.set_top_rated(Reply::Ok(listing));
        api
    }

    pub fn set_top_rated(&self, reply: Reply<Vec<TopRatedEntry>>) {
        *self.top_rated.lock().unwrap() = reply;
    }

    pub fn set_find(&self, query: &str, reply: Reply<FindResponse>) {
        self.finds.lock().unwrap().insert(query.to_string(), reply);
    }

    /// Every call made so far, e.g. `["top_rated", "find:tt0000001"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn find_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix("find:").map(str::to_string))
            .collect()
    }
}

impl MovieApi for MockApi {
    fn top_rated(&self) -> Pin<Box<dyn Future<Output = ApiResult<Vec<TopRatedEntry>>> + Send + '_>> {
        self.calls.lock().unwrap().push("top_rated".to_string());
        let reply = self.top_rated.lock().unwrap().clone();
        Box::pin(reply.resolve())
    }

    fn find(
        &self,
        query: &str,
    ) -> Pin<Box<dyn Future<Output = ApiResult<FindResponse>> + Send + '_>> {
        self.calls.lock().unwrap().push(format!("find:{query}"));
        let reply = self
            .finds
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| {
                Reply::Ok(FindResponse {
                    query: query.to_string(),
                    results: Vec::new(),
                })
            });
        Box::pin(reply.resolve())
    }
}

/// Bare title id for the n-th scripted movie.
pub fn title_id(n: usize) -> String {
    format!("tt{n:07}")
}

/// A lookup body with a single titled result.
pub fn find_response(id: &str, title: &str) -> FindResponse {
    FindResponse {
        query: id.to_string(),
        results: vec![FindResult {
            id: format!("/title/{id}/"),
            title: Some(title.to_string()),
            year: Some(1994),
            running_time_in_minutes: Some(142),
            chart_rating: None,
            description: None,
            image: Some(Image {
                url: Some(format!("https://img.example/{id}.jpg")),
                height: None,
                width: None,
            }),
            principals: Vec::new(),
        }],
    }
}
