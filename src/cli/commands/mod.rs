//! CLI command implementations

pub mod headless;

pub use headless::execute_headless;
