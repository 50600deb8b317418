//! Application events for TUI and CLI operations

use crate::models::output::OutputLine;
use crate::models::report::{CycleReport, Phase};

/// Application events for communication between components
#[derive(Debug)]
pub enum AppEvent {
    // Cycle events
    CycleStarted(Vec<String>),     // compiler command line
    Output(Phase, OutputLine),     // phase, line
    PhaseFinished(Phase, i32),     // phase, exit code
    CycleFinished(Box<CycleReport>),
    CycleFailed(String),           // error message

    // Clipboard events
    ClipboardText(String),
    ClipboardFailed(String),

    // General events
    Tick,

    // User feedback events for TUI
    Error(String),
    Warning(String),
    Info(String),
}
