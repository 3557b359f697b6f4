// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// An isolated home for one test: config file and state directory.
pub struct Sandbox {
    pub temp: TempDir,
}

impl Sandbox {
    /// A sandbox whose config points at `base_url` with a test key.
    pub fn new(base_url: &str) -> Self {
        Self::with_config(&format!(
            "[api]\nkey = \"test-key\"\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n"
        ))
    }

    pub fn with_config(config: &str) -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), config).unwrap();
        Sandbox { temp }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.temp.path().join("state")
    }

    /// The `reel` binary, confined to this sandbox.
    pub fn reel(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("reel");
        cmd.env("REEL_CONFIG", self.config_path())
            .env("REEL_STATE_DIR", self.state_dir())
            .env_remove("REEL_API_KEY")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// A canned HTTP API on localhost, answering like imdb8.
pub struct FakeApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    /// Serve a listing of `count` movies, each with a lookup. Lookups for
    /// anything else answer 404.
    pub fn start(count: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle(stream, count, &seen);
            }
        });

        FakeApi { base_url, requests }
    }

    /// Request targets received so far, e.g. `/title/find?q=tt0000001`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, count: usize, seen: &Mutex<Vec<String>>) {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(1) => head.push(byte[0]),
            _ => return,
        }
    }
    let head = String::from_utf8_lossy(&head);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(target.clone());

    let (status, body) = route(&target, count);
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

fn route(target: &str, count: usize) -> (&'static str, String) {
    if target == "/title/get-top-rated-movies" {
        let entries: Vec<String> = (1..=count)
            .map(|n| format!(r#"{{"id":"/title/{}/","chartRating":{:.1}}}"#, title_id(n), 9.5 - n as f64 / 10.0))
            .collect();
        return ("200 OK", format!("[{}]", entries.join(",")));
    }
    if let Some(query) = target.strip_prefix("/title/find?q=") {
        let known = (1..=count).any(|n| title_id(n) == query);
        if known {
            let n: usize = query[2..].parse().unwrap();
            return ("200 OK", find_body(query, n));
        }
    }
    ("404 Not Found", r#"{"message":"Not Found"}"#.to_string())
}

fn find_body(id: &str, n: usize) -> String {
    format!(
        r#"{{"query":"{id}","results":[{{"id":"/title/{id}/","title":"Movie {n}","year":1994,"runningTimeInMinutes":142,"chartRating":{{"rating":9.3}},"description":{{"text":"A test movie."}},"image":{{"url":"https://img.example/{id}.jpg","height":1,"width":1}},"principals":[{{"id":"/name/nm0000209/","name":"Tim Robbins","category":"actor","characters":["Andy Dufresne"]}}]}}]}}"#
    )
}

pub fn title_id(n: usize) -> String {
    format!("tt{n:07}")
}
