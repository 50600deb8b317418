//! Error types for cppexec

pub mod types;

pub use types::*;
