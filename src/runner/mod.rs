//! Compile-and-run orchestration
//!
//! A cycle writes the editor text into a fresh [`Workspace`], runs the
//! compiler there, and on exit status zero runs the produced `a.out`. Both
//! children are streamed through [`process::stream_process`].

pub mod command;
pub mod cycle;
pub mod process;
pub mod workspace;

pub use command::build_compile_command;
pub use cycle::compile_and_run;
pub use process::{ProcessOutcome, stream_process};
pub use workspace::Workspace;
