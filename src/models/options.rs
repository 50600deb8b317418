//! Compiler option models

use serde::{Deserialize, Serialize};

/// Default compiler binary
pub const DEFAULT_COMPILER: &str = "/usr/bin/gcc";

/// Language standard handed to the compiler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Language {
    /// ISO C99
    #[default]
    #[value(name = "c99")]
    #[serde(rename = "c99")]
    C99,
    /// ISO C++98
    #[value(name = "c++98")]
    #[serde(rename = "c++98")]
    Cpp98,
}

impl Language {
    pub fn std_flag(&self) -> &'static str {
        match self {
            Language::C99 => "-std=c99",
            Language::Cpp98 => "-std=c++98",
        }
    }

    /// Name of the source file written into the workspace. gcc picks the
    /// front-end from the extension.
    pub fn source_file_name(&self) -> &'static str {
        match self {
            Language::C99 => "code.c",
            Language::Cpp98 => "code.cpp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::C99 => "C99",
            Language::Cpp98 => "C++98",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::C99 => Language::Cpp98,
            Language::Cpp98 => Language::C99,
        }
    }
}

/// Everything the compile command line is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    pub compiler: String,
    pub language: Language,
    pub wall: bool,
    pub debug: bool,
    pub optimize: bool,
    pub include_path: String,
    pub library_path: String,
    pub library: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
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
