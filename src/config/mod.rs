//! Configuration management for cppexec

pub mod app_config;

pub use app_config::*;
