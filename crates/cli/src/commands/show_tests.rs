// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{output, TestContext};
use crate::error::Error;
use crate::remote::mock::{find_response, MockApi, Reply};
use reel_core::MovieDetails;
use yare::parameterized;

#[parameterized(
    bare = { "tt0111161", "tt0111161" },
    path = { "/title/tt0111161/", "tt0111161" },
    padded = { "  tt0111161 ", "tt0111161" },
    free_text = { "the godfather", "the godfather" },
)]
fn test_normalize_query(input: &str, expected: &str) {
    assert_eq!(normalize_query(input).unwrap(), expected);
}

#[test]
fn test_normalize_rejects_bad_path() {
    assert!(matches!(
        normalize_query("/title/"),
        Err(Error::InvalidImdbId(_))
    ));
}

#[tokio::test]
async fn test_show_text() {
    let api = MockApi::new();
    api.set_find("tt0111161", Reply::Ok(find_response("tt0111161", "The Shawshank Redemption")));
    let ctx = TestContext::new(api);
    let mut out = Vec::new();

    run_impl(&ctx.repo, "tt0111161", OutputFormat::Text, &mut out)
        .await
        .unwrap();

    let text = output(out);
    assert!(text.starts_with("The Shawshank Redemption (tt0111161)\n"));
    assert!(text.contains("Released: 1994"));
    assert!(text.contains("Running time: 142 min"));
    assert!(text.contains("Rating: Unknown"));
    assert!(text.contains("    Not provided"));
}

#[tokio::test]
async fn test_show_json() {
    let api = MockApi::new();
    api.set_find("tt0111161", Reply::Ok(find_response("tt0111161", "X")));
    let ctx = TestContext::new(api);
    let mut out = Vec::new();

    run_impl(&ctx.repo, "tt0111161", OutputFormat::Json, &mut out)
        .await
        .unwrap();

    let details: MovieDetails = serde_json::from_str(&output(out)).unwrap();
    assert_eq!(details.title, "X");
    assert_eq!(details.id, "tt0111161");
}

#[tokio::test]
async fn test_show_not_found_message() {
    let api = MockApi::new();
    api.set_find("tt0111161", Reply::Http(404, Some("Not Found".into())));
    let ctx = TestContext::new(api);
    let mut out = Vec::new();

    let err = run_impl(&ctx.repo, "tt0111161", OutputFormat::Text, &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_show_does_not_touch_cache() {
    let api = MockApi::new();
    api.set_find("tt0111161", Reply::Ok(find_response("tt0111161", "X")));
    let ctx = TestContext::new(api);
    let mut out = Vec::new();

    run_impl(&ctx.repo, "tt0111161", OutputFormat::Text, &mut out)
        .await
        .unwrap();

    assert_eq!(ctx.db().count_top_movies().unwrap(), 0);
}
