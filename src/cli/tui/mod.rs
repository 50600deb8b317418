//! Terminal User Interface components

pub mod editor;
pub mod event_loop;
pub mod main_app;
pub mod ui;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};

use crate::cli::args::Cli;
use crate::config::AppConfig;

/// Run the Terminal User Interface
pub async fn run_tui(cli: &Cli, config: &AppConfig) -> Result<()> {
    let source = match &cli.source {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read source file {}", path.display()))?,
        ),
        None => None,
    };

    let app = main_app::App::new(
        cli.compile_options(config),
        cli.clipboard_command(config),
        source.as_deref(),
    );
    event_loop::run_tui_event_loop(app, cli.xclip).await
}
