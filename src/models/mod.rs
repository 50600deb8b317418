//! Data models and types used throughout cppexec

pub mod events;
pub mod options;
pub mod output;
pub mod report;
pub mod tui;

// Re-export commonly used types
pub use events::*;
pub use options::*;
pub use output::*;
pub use report::*;

// Only export TUI-specific types that don't conflict
pub use tui::{CycleStatus, FocusedPane};
