// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Read from `$REEL_CONFIG`, else `<config_dir>/reel/config.toml`. A missing
//! file means defaults. `REEL_API_KEY` takes precedence over `api.key`, and
//! the cache database lives in the state directory unless `cache.path` says
//! otherwise.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};
use crate::remote::ImdbConfig;
use crate::sync::SyncConfig;

const APP_DIR_NAME: &str = "reel";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "movies.db";
const REDACTED: &str = "********";

/// Contents of `config.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sync: SyncSection,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// RapidAPI key. Overridden by `REEL_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `X-RapidAPI-Host` header.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Synchronization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncSection {
    /// Leading top-rated entries kept on a refresh (default: 10).
    #[serde(default = "default_top_movie_limit")]
    pub top_movie_limit: usize,
}

/// Local cache settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Database file. Defaults to `movies.db` in the state directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    ImdbConfig::default().base_url
}

fn default_host() -> String {
    ImdbConfig::default().host
}

fn default_timeout_secs() -> u64 {
    ImdbConfig::default().timeout_secs
}

fn default_top_movie_limit() -> usize {
    SyncConfig::default().top_movie_limit
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            key: None,
            base_url: default_base_url(),
            host: default_host(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SyncSection {
    fn default() -> Self {
        SyncSection {
            top_movie_limit: default_top_movie_limit(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.sync.top_movie_limit == 0 {
            return Err(Error::Config(
                "sync.top_movie_limit must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Loads configuration from the default location.
    pub fn load_default() -> Result<Self> {
        Config::load(&config_path()?)
    }

    /// The API key, preferring `REEL_API_KEY` over the file.
    pub fn api_key(&self) -> Result<String> {
        resolve_api_key(env::api_key(), self.api.key.as_deref())
    }

    /// Settings for the HTTP client.
    pub fn imdb_config(&self) -> Result<ImdbConfig> {
        Ok(ImdbConfig {
            base_url: self.api.base_url.trim_end_matches('/').to_string(),
            host: self.api.host.clone(),
            api_key: self.api_key()?,
            timeout_secs: self.api.timeout_secs,
        })
    }

    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig {
            top_movie_limit: self.sync.top_movie_limit,
        }
    }

    /// Location of the cache database.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.cache.path {
            Some(path) => Ok(path.clone()),
            None => Ok(state_dir()?.join(DB_FILE_NAME)),
        }
    }

    /// The configuration as TOML, with the API key masked.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        if shown.api.key.is_some() {
            shown.api.key = Some(REDACTED.to_string());
        }
        toml::to_string_pretty(&shown)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<&str>) -> Result<String> {
    from_env
        .or_else(|| {
            from_file
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
        })
        .ok_or(Error::MissingApiKey)
}

/// Path of the configuration file.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = env::config_path() {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(Error::NoConfigDir)
}

/// Directory holding the cache database.
pub fn state_dir() -> Result<PathBuf> {
    resolve_state_dir(env::state_dir(), env::xdg_state_home(), dirs::home_dir())
}

fn resolve_state_dir(
    explicit: Option<PathBuf>,
    xdg_state_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = xdg_state_home {
        return Ok(dir.join(APP_DIR_NAME));
    }
    home.map(|h| h.join(".local/state").join(APP_DIR_NAME))
        .ok_or(Error::NoStateDir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
