//! Application configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::clipboard::DEFAULT_CLIPBOARD_COMMAND;
use crate::errors::{CppExecError, Result};
use crate::models::{CompileOptions, DEFAULT_COMPILER, Language};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Compiler binary
    pub compiler: String,
    /// Tool used to read the clipboard (`<tool> --clipboard`)
    pub clipboard_command: String,
    /// Initial state of the option toggles and fields
    pub defaults: OptionDefaults,
}

/// Initial compiler options shown in the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionDefaults {
    pub language: Language,
    pub wall: bool,
    pub debug: bool,
    pub optimize: bool,
    pub include_path: String,
    pub library_path: String,
    pub library: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            clipboard_command: DEFAULT_CLIPBOARD_COMMAND.to_string(),
            defaults: OptionDefaults::default(),
        }
    }
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            language: Language::C99,
            wall: false,
            debug: false,
            optimize: false,
            include_path: String::new(),
            library_path: String::new(),
            library: String::new(),
        }
    }
}

impl AppConfig {
    /// `$XDG_CONFIG_HOME/cppexec/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join("config.toml"))
    }

    /// Load from an explicit path, which must exist, or from the default
    /// location, where a missing file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CppExecError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            compiler: self.compiler.clone(),
            language: self.defaults.language,
            wall: self.defaults.wall,
            debug: self.defaults.debug,
            optimize: self.defaults.optimize,
            include_path: self.defaults.include_path.clone(),
            library_path: self.defaults.library_path.clone(),
            library: self.defaults.library.clone(),
        }
    }
}
