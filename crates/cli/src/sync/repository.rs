// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cache-or-fetch policy for movie data.
//!
//! Top-rated movies are served from the local store whenever it holds any
//! rows; the cache is trusted without a freshness check and only
//! `reel cache clear` forces a refetch. On a miss the listing is fetched,
//! cut down to [`SyncConfig::top_movie_limit`] entries, enriched one lookup
//! per entry, reported, then written back. Details are never cached.

use std::sync::Arc;

use reel_core::{Database, MovieDetails, TopMovie};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use super::error::SyncResult;
use super::stream::{Emitter, StatusStream};
use crate::remote::{ApiError, ApiResult, MovieApi, TopRatedEntry};

/// Tunables for the synchronization policy.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Number of leading top-rated entries kept and enriched.
    pub top_movie_limit: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            top_movie_limit: 10,
        }
    }
}

/// Movie data source combining the remote client and the local store.
pub struct MovieRepository<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for MovieRepository<A> {
    fn clone(&self) -> Self {
        MovieRepository {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<A> {
    api: A,
    db: Mutex<Database>,
    config: SyncConfig,
}

impl<A: MovieApi + 'static> MovieRepository<A> {
    pub fn new(api: A, db: Database, config: SyncConfig) -> Self {
        MovieRepository {
            inner: Arc::new(Inner {
                api,
                db: Mutex::new(db),
                config,
            }),
        }
    }

    /// Stream the top-rated movies.
    pub fn top_movies(&self, cancel: CancellationToken) -> StatusStream<Vec<TopMovie>> {
        let inner = Arc::clone(&self.inner);
        StatusStream::spawn(cancel, move |out| async move { inner.top_movies(out).await })
    }

    /// Stream the details of the first title matching `query`.
    pub fn movie_details(&self, query: &str, cancel: CancellationToken) -> StatusStream<MovieDetails> {
        let inner = Arc::clone(&self.inner);
        let query = query.to_string();
        StatusStream::spawn(cancel, move |out| async move {
            inner.movie_details(&query, out).await
        })
    }

    /// Run `f` against the local store.
    #[cfg(test)]
    pub(crate) async fn with_store<R>(&self, f: impl FnOnce(&mut Database) -> R) -> R {
        let mut db = self.inner.db.lock().await;
        f(&mut db)
    }
}

impl<A: MovieApi> Inner<A> {
    async fn top_movies(&self, out: Emitter<Vec<TopMovie>>) -> SyncResult<()> {
        out.loading().await?;

        let cached = self.db.lock().await.read_top_movies()?;
        if !cached.is_empty() {
            tracing::debug!(count = cached.len(), "serving top movies from cache");
            return out.success(cached).await;
        }

        let movies = match self.fetch_top_movies().await {
            Ok(movies) => movies,
            Err(e) => return report(out, e).await,
        };

        out.success(movies.clone()).await?;
        self.write_back(&movies).await;
        Ok(())
    }

    async fn fetch_top_movies(&self) -> ApiResult<Vec<TopMovie>> {
        let listing = self.api.top_rated().await?;
        let mut movies = listing
            .iter()
            .take(self.config.top_movie_limit)
            .map(TopRatedEntry::to_top_movie)
            .collect::<ApiResult<Vec<_>>>()?;
        tracing::debug!(listed = listing.len(), kept = movies.len(), "fetched top-rated listing");

        for movie in &mut movies {
            let (title, image_url) = self
                .api
                .find(&movie.id)
                .await?
                .into_first_title(&movie.id)?
                .enrichment();
            movie.enrich(title, image_url);
        }
        Ok(movies)
    }

    /// Best-effort cache refresh. A failure is logged, never reported.
    async fn write_back(&self, movies: &[TopMovie]) {
        let mut db = self.db.lock().await;
        match db.replace_top_movies(movies) {
            Ok(()) => tracing::debug!(count = movies.len(), "cached top movies"),
            Err(e) => tracing::warn!(error = %e, "failed to cache top movies"),
        }
    }

    async fn movie_details(&self, query: &str, out: Emitter<MovieDetails>) -> SyncResult<()> {
        out.loading().await?;
        match self.fetch_details(query).await {
            Ok(details) => out.success(details).await,
            Err(e) => report(out, e).await,
        }
    }

    async fn fetch_details(&self, query: &str) -> ApiResult<MovieDetails> {
        self.api.find(query).await?.into_first_title(query)?.into_details()
    }
}

/// Turn a remote failure into a terminal `Error` envelope, or propagate it
/// when it has no user-facing message.
async fn report<T>(out: Emitter<T>, err: ApiError) -> SyncResult<()> {
    match err.user_message() {
        Some(message) => {
            tracing::debug!(error = %message, "request failed");
            out.error(message).await
        }
        None => Err(err.into()),
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
