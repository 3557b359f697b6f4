// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed local cache for top-rated movies.
//!
//! The [`Database`] struct stores the denormalized top-movie list. Rows are
//! read back in insertion order, which is the ranking order of the remote
//! listing.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::error::{Error, Result};
use crate::movie::TopMovie;

/// SQL schema for the movie cache database.
pub const SCHEMA: &str = r#"
-- Top-rated movies; position keeps the ranking order of the listing
CREATE TABLE IF NOT EXISTS top_movies (
    position INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    title TEXT,
    image_url TEXT,
    rating REAL,
    cached_at TEXT NOT NULL
);
"#;

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Create the schema on a database connection. Idempotent.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Insert rows on an open connection or transaction.
///
/// Ids are not unique: a listing that repeats a title is stored as given.
fn insert_rows(conn: &Connection, movies: &[TopMovie], cached_at: DateTime<Utc>) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO top_movies (id, title, image_url, rating, cached_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    let cached_at = cached_at.to_rfc3339();
    for movie in movies {
        stmt.execute(params![
            movie.id,
            movie.title,
            movie.image_url,
            movie.rating,
            cached_at,
        ])?;
    }
    Ok(())
}

/// SQLite database connection with movie cache operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Read every cached top movie in ranking order.
    pub fn read_top_movies(&self) -> Result<Vec<TopMovie>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, image_url, rating FROM top_movies ORDER BY position",
        )?;

        let movies = stmt
            .query_map([], |row| {
                Ok(TopMovie {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    image_url: row.get(2)?,
                    rating: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    /// Number of cached top movies.
    pub fn count_top_movies(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM top_movies", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// When the cached list was written, if anything is cached.
    pub fn cached_at(&self) -> Result<Option<DateTime<Utc>>> {
        let value: Option<String> =
            self.conn
                .query_row("SELECT MAX(cached_at) FROM top_movies", [], |row| {
                    row.get(0)
                })?;
        value
            .map(|s| parse_timestamp(&s, "cached_at"))
            .transpose()
            .map_err(Error::from)
    }

    /// Remove every cached top movie. Returns the number of rows removed.
    pub fn clear_top_movies(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM top_movies", [])?;
        Ok(removed)
    }

    /// Append records after the existing ones, keeping their order.
    pub fn insert_top_movies(&self, movies: &[TopMovie]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        insert_rows(&tx, movies, Utc::now())?;
        tx.commit()?;
        Ok(())
    }

    /// Clear the cache and insert `movies` in a single transaction.
    ///
    /// On failure the previous contents are left in place.
    pub fn replace_top_movies(&mut self, movies: &[TopMovie]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM top_movies", [])?;
        insert_rows(&tx, movies, Utc::now())?;
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
