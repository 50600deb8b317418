//! Result of one compile-and-run cycle

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::output::OutputBuffer;

/// The two halves of a compile-and-run cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Compile,
    Run,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Compile => "Compile",
            Phase::Run => "Run",
        }
    }
}

/// Exit codes and captured output of one cycle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleReport {
    pub command: Vec<String>,
    pub compile_exit: Option<i32>,
    pub run_exit: Option<i32>,
    pub compile_output: OutputBuffer,
    pub run_output: OutputBuffer,
    /// Directory the cycle worked in; removed by the time the report is returned
    pub workspace: PathBuf,
}

impl CycleReport {
    pub fn compiled(&self) -> bool {
        self.compile_exit == Some(0)
    }

    pub fn ran(&self) -> bool {
        self.run_exit.is_some()
    }

    /// Process exit code for headless mode: the run code, or the compile
    /// code when nothing ran. A child killed by signal N (recorded as `-N`)
    /// maps to `128 + N`, as a shell reports it.
    pub fn final_exit_code(&self) -> i32 {
        match self.run_exit.or(self.compile_exit) {
            Some(code) if code < 0 => 128 - code,
            Some(code) => code,
            None => 1,
        }
    }

    pub fn output(&self, phase: Phase) -> &OutputBuffer {
        match phase {
            Phase::Compile => &self.compile_output,
            Phase::Run => &self.run_output,
        }
    }

    pub fn output_mut(&mut self, phase: Phase) -> &mut OutputBuffer {
        match phase {
            Phase::Compile => &mut self.compile_output,
            Phase::Run => &mut self.run_output,
        }
    }
}
