//! Command line argument parsing

use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::models::{CompileOptions, Language};

/// Rendering used by headless mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain lines, program stderr on stderr
    #[default]
    Text,
    /// HTML fragment with stderr in red spans
    Html,
    /// Full cycle report as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "cppexec")]
#[command(about = "Type C/C++ into a terminal editor, compile it with gcc and run it")]
pub struct Cli {
    /// Source file to preload into the editor (headless mode: `-` or absent reads stdin)
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Language standard (legacy spelling: -std=c++98)
    #[arg(long = "std", value_enum)]
    pub std: Option<Language>,

    /// Enable -Wall (legacy spelling: -Wall)
    #[arg(long)]
    pub wall: bool,

    /// Compile with debug info (-g)
    #[arg(short = 'g', long)]
    pub debug: bool,

    /// Compile with optimization (-O2)
    #[arg(short = 'O', long)]
    pub optimize: bool,

    /// Include directory passed as -I
    #[arg(long, value_name = "DIR")]
    pub include_path: Option<String>,

    /// Library directory passed as -L
    #[arg(long, value_name = "DIR")]
    pub library_path: Option<String>,

    /// Library passed as -l
    #[arg(long, value_name = "NAME")]
    pub library: Option<String>,

    /// Compiler binary (default: /usr/bin/gcc)
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<String>,

    /// Clipboard tool invoked as `<tool> --clipboard` (default: /usr/bin/xsel)
    #[arg(long, value_name = "PATH")]
    pub clipboard_command: Option<String>,

    /// Config file (default: $XDG_CONFIG_HOME/cppexec/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Paste the clipboard into the editor and run it (legacy spelling: -xclip)
    #[arg(long)]
    pub xclip: bool,

    /// Run one compile-and-run cycle without the TUI and exit with its code
    #[arg(long, help = "Run in CLI mode without interactive TUI")]
    pub cli: bool,

    /// Output rendering in CLI mode
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_args(std::env::args_os()))
    }

    /// Config values with every flag given on the command line applied on top
    pub fn compile_options(&self, config: &AppConfig) -> CompileOptions {
        let mut options = config.compile_options();

        if let Some(language) = self.std {
            options.language = language;
        }
        options.wall |= self.wall;
        options.debug |= self.debug;
        options.optimize |= self.optimize;

        if let Some(compiler) = &self.compiler {
            options.compiler = compiler.clone();
        }
        if let Some(dir) = &self.include_path {
            options.include_path = dir.clone();
        }
        if let Some(dir) = &self.library_path {
            options.library_path = dir.clone();
        }
        if let Some(lib) = &self.library {
            options.library = lib.clone();
        }

        options
    }

    pub fn clipboard_command(&self, config: &AppConfig) -> String {
        self.clipboard_command
            .clone()
            .unwrap_or_else(|| config.clipboard_command.clone())
    }
}

/// Rewrite the gcc-style single-dash spellings into the long options clap
/// understands. Everything else passes through untouched.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str().and_then(legacy_alias) {
            Some(alias) => OsString::from(alias),
            None => arg,
        })
        .collect()
}

fn legacy_alias(arg: &str) -> Option<String> {
    match arg {
        "-Wall" => Some("--wall".to_string()),
        "-xclip" => Some("--xclip".to_string()),
        "-O2" => Some("--optimize".to_string()),
        _ => arg
            .strip_prefix("-std=")
            .map(|standard| format!("--std={}", standard)),
    }
}
