//! Logging utilities and initialization for cppexec

use anyhow::Result;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::models::AppEvent;

/// Map `-q` / `-v` counts to a level filter
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Initialize logging for cppexec
pub fn init_cli_logging(verbose: u8, quiet: bool, tui_mode: bool) -> Result<()> {
    let level = level_for(verbose, quiet);

    if tui_mode {
        // File logging only for TUI mode to avoid terminal interference
        init_file_logger(level)?;
    } else {
        Builder::from_default_env()
            .target(Target::Stderr)
            .filter_level(level)
            .format_timestamp_secs()
            .format_module_path(false)
            .init();
    }

    log_panics::init();

    log::debug!("cppexec logging initialized with level: {:?}", level);
    Ok(())
}

/// Directory the TUI log file is written to
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::APP_NAME)
        .join("logs")
}

fn init_file_logger(level: LevelFilter) -> Result<()> {
    use std::fs::OpenOptions;

    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("cppexec.log"))?;

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(file)))
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .init();

    Ok(())
}

/// TUI-safe logging helper that sends messages via AppEvent instead of direct output
#[derive(Clone)]
pub struct TuiLogger {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl TuiLogger {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Send error message to TUI via AppEvent
    pub fn error(&self, message: String) {
        log::error!("{}", message);
        if let Err(e) = self.tx.send(AppEvent::Error(message)) {
            log::error!("Failed to send error event to TUI: {}", e);
        }
    }

    /// Send warning message to TUI via AppEvent
    pub fn warning(&self, message: String) {
        log::warn!("{}", message);
        if let Err(e) = self.tx.send(AppEvent::Warning(message)) {
            log::warn!("Failed to send warning event to TUI: {}", e);
        }
    }

    /// Send info message to TUI via AppEvent
    pub fn info(&self, message: String) {
        log::info!("{}", message);
        if let Err(e) = self.tx.send(AppEvent::Info(message)) {
            log::info!("Failed to send info event to TUI: {}", e);
        }
    }
}
