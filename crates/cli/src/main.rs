// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use reelrs::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    reelrs::logging::setup_logging(cli.verbose);
    if let Err(e) = reelrs::run(cli.command).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
