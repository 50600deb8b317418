//! Compiler command line assembly

use std::path::Path;

use crate::models::{CompileOptions, Language};

/// Build the full argument vector, program first.
///
/// Library flags go after the source file so the linker sees the object
/// that references them before the archive that resolves them.
pub fn build_compile_command(options: &CompileOptions, source_path: &Path) -> Vec<String> {
    let mut cmd = vec![options.compiler.clone()];
    cmd.push(options.language.std_flag().to_string());

    if options.wall {
        cmd.push("-Wall".to_string());
    }
    if options.debug {
        cmd.push("-g".to_string());
    }
    if options.optimize {
        cmd.push("-O2".to_string());
    }

    let include_path = options.include_path.trim();
    if !include_path.is_empty() {
        cmd.push("-I".to_string());
        cmd.push(include_path.to_string());
    }

    cmd.push(source_path.to_string_lossy().into_owned());

    let library_path = options.library_path.trim();
    if !library_path.is_empty() {
        cmd.push("-L".to_string());
        cmd.push(library_path.to_string());
    }
    let library = options.library.trim();
    if !library.is_empty() {
        cmd.push("-l".to_string());
        cmd.push(library.to_string());
    }

    // gcc does not pull in the C++ runtime on its own
    if options.language == Language::Cpp98 {
        cmd.push("-lstdc++".to_string());
    }

    cmd
}
