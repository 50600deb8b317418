//! Utility functions and helpers used throughout cppexec

pub mod logging;
