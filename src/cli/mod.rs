//! Command Line Interface module
//!
//! This module contains the CLI argument parsing, the headless command,
//! and the Terminal User Interface (TUI) components.

pub mod args;
pub mod commands;
pub mod tui;

pub use args::*;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::utils::logging::init_cli_logging;

/// Main CLI application runner; returns the process exit code
pub async fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    init_cli_logging(cli.verbose, cli.quiet, !cli.cli)?;

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if cli.cli {
        commands::headless::execute_headless(&cli, &config).await
    } else {
        tui::run_tui(&cli, &config).await?;
        Ok(0)
    }
}
