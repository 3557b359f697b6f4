// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.sync.top_movie_limit, 10);
    assert_eq!(config.api.base_url, "https://imdb8.p.rapidapi.com");
    assert_eq!(config.api.host, "imdb8.p.rapidapi.com");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_temp, path) = write_config(
        r#"
[api]
key = "abc"

[sync]
top_movie_limit = 25
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.api.key.as_deref(), Some("abc"));
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.sync.top_movie_limit, 25);
    assert!(config.cache.path.is_none());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let (_temp, path) = write_config("[api\nkey = ");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("failed to parse config")));
}

#[test]
fn test_zero_limit_rejected() {
    let (_temp, path) = write_config("[sync]\ntop_movie_limit = 0\n");
    assert!(matches!(Config::load(&path), Err(Error::Config(_))));
}

#[parameterized(
    env_wins = { Some("from-env"), Some("from-file"), Some("from-env") },
    file_used = { None, Some("from-file"), Some("from-file") },
    file_trimmed = { None, Some("  padded  "), Some("padded") },
    blank_file = { None, Some("  "), None },
    neither = { None, None, None },
)]
fn test_resolve_api_key(from_env: Option<&str>, from_file: Option<&str>, expected: Option<&str>) {
    let resolved = resolve_api_key(from_env.map(str::to_string), from_file);
    match expected {
        Some(key) => assert_eq!(resolved.unwrap(), key),
        None => assert!(matches!(resolved, Err(Error::MissingApiKey))),
    }
}

#[test]
fn test_state_dir_precedence() {
    let explicit = Some(PathBuf::from("/explicit"));
    let xdg = Some(PathBuf::from("/xdg"));
    let home = Some(PathBuf::from("/home/me"));

    assert_eq!(
        resolve_state_dir(explicit, xdg.clone(), home.clone()).unwrap(),
        PathBuf::from("/explicit")
    );
    assert_eq!(
        resolve_state_dir(None, xdg, home.clone()).unwrap(),
        PathBuf::from("/xdg/reel")
    );
    assert_eq!(
        resolve_state_dir(None, None, home).unwrap(),
        PathBuf::from("/home/me/.local/state/reel")
    );
    assert!(matches!(
        resolve_state_dir(None, None, None),
        Err(Error::NoStateDir)
    ));
}

#[test]
fn test_explicit_cache_path() {
    let config = Config {
        cache: CacheConfig {
            path: Some(PathBuf::from("/data/cache.db")),
        },
        ..Config::default()
    };
    assert_eq!(config.db_path().unwrap(), PathBuf::from("/data/cache.db"));
}

#[test]
fn test_sync_config_mirrors_file() {
    let mut config = Config::default();
    config.sync.top_movie_limit = 3;
    assert_eq!(config.sync_config().top_movie_limit, 3);
}

#[test]
fn test_redacted_toml_hides_key() {
    let mut config = Config::default();
    config.api.key = Some("super-secret".to_string());

    let shown = config.to_redacted_toml().unwrap();

    assert!(!shown.contains("super-secret"));
    assert!(shown.contains(REDACTED));
    assert!(shown.contains("top_movie_limit = 10"));
}

#[test]
fn test_redacted_toml_round_trips_without_key() {
    let config = Config::default();
    let shown = config.to_redacted_toml().unwrap();
    let parsed: Config = toml::from_str(&shown).unwrap();
    assert_eq!(parsed, config);
}
