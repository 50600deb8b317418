//! Clipboard access through an external selection tool

use std::process::Stdio;

use tokio::process::Command;

use crate::errors::{CppExecError, Result};

/// Default selection tool
pub const DEFAULT_CLIPBOARD_COMMAND: &str = "/usr/bin/xsel";

/// Read the clipboard selection by running `<command> --clipboard`
pub async fn read_clipboard(command: &str) -> Result<String> {
    let output = Command::new(command)
        .arg("--clipboard")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| CppExecError::spawn(command, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CppExecError::Clipboard(format!(
            "{} exited with {}: {}",
            command,
            output.status,
            stderr.trim()
        )));
    }

    let text = normalize_clipboard_text(&String::from_utf8_lossy(&output.stdout));
    log::debug!("Read {} bytes from clipboard", text.len());
    Ok(text)
}

/// Drop the terminator of every line so the text can be appended line by line
pub fn normalize_clipboard_text(raw: &str) -> String {
    raw.lines().collect::<Vec<_>>().join("\n")
}
