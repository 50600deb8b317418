//! Custom error types for cppexec

use std::fmt;

/// Main error type for cppexec operations
#[derive(Debug)]
pub enum CppExecError {
    /// Configuration file could not be read or parsed
    Config(String),
    /// A child process (compiler, program, clipboard tool) could not be started
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// Clipboard tool ran but did not hand back usable text
    Clipboard(String),
    /// TUI related errors
    Tui(String),
    /// General I/O errors
    Io(std::io::Error),
}

impl CppExecError {
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        CppExecError::Spawn {
            program: program.into(),
            source,
        }
    }
}

impl fmt::Display for CppExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CppExecError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CppExecError::Spawn { program, source } => {
                write!(f, "Failed to start {}: {}", program, source)
            }
            CppExecError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            CppExecError::Tui(msg) => write!(f, "TUI error: {}", msg),
            CppExecError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for CppExecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CppExecError::Spawn { source, .. } => Some(source),
            CppExecError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CppExecError {
    fn from(err: std::io::Error) -> Self {
        CppExecError::Io(err)
    }
}

impl From<toml::de::Error> for CppExecError {
    fn from(err: toml::de::Error) -> Self {
        CppExecError::Config(err.to_string())
    }
}

/// Result type alias for cppexec operations
pub type Result<T> = std::result::Result<T, CppExecError>;
