// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigCommand;
use crate::config::{config_path, Config};
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    let path = config_path()?;
    let mut out = std::io::stdout();
    match cmd {
        ConfigCommand::Path => run_path(&path, &mut out),
        ConfigCommand::Show => run_show(&Config::load(&path)?, &mut out),
    }
}

pub(crate) fn run_path(path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", path.display())?;
    Ok(())
}

pub(crate) fn run_show(config: &Config, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", config.to_redacted_toml()?)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
