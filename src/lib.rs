//! cppexec - compile and run C/C++ snippets from a terminal editor
//!
//! The editor text is written into a throwaway directory, handed to the
//! system compiler, and on success the produced binary is executed. Output
//! from both processes is streamed line by line into the UI.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod models;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use models::*;
pub use runner::{Workspace, build_compile_command, compile_and_run};

/// cppexec version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// cppexec application name
pub const APP_NAME: &str = "cppexec";
