//! Child process execution with live line streaming

use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;

use crate::errors::{CppExecError, Result};
use crate::models::{AppEvent, OutputBuffer, OutputLine, OutputStream, Phase};

/// Exit code and everything the child wrote
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub exit_code: i32,
    pub output: OutputBuffer,
}

/// Spawn `cmd` with piped stdout/stderr and stream each decoded line as an
/// [`AppEvent::Output`] for `phase`.
///
/// Returns once both pipes are drained and the child has exited, so every
/// line is delivered before the exit code.
pub async fn stream_process(
    mut cmd: Command,
    phase: Phase,
    tx: &mpsc::UnboundedSender<AppEvent>,
) -> Result<ProcessOutcome> {
    let program = cmd.as_std().get_program().to_string_lossy().into_owned();

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .map_err(|e| CppExecError::spawn(program.clone(), e))?;
    log::debug!("{} phase started {} (pid {:?})", phase.name(), program, child.id());

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| CppExecError::Io(std::io::Error::other("stdout was not captured")))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| CppExecError::Io(std::io::Error::other("stderr was not captured")))?;

    let (line_tx, mut line_rx) = mpsc::unbounded_channel();
    tokio::spawn(forward_lines(stdout, OutputStream::Stdout, line_tx.clone()));
    tokio::spawn(forward_lines(stderr, OutputStream::Stderr, line_tx));

    // The channel closes once both readers hit EOF
    let mut output = OutputBuffer::new();
    while let Some(line) = line_rx.recv().await {
        let _ = tx.send(AppEvent::Output(phase, line.clone()));
        output.push(line);
    }

    let status = child.wait().await?;
    let exit_code = exit_code(status);
    log::info!("{} phase finished with exit code {}", phase.name(), exit_code);

    Ok(ProcessOutcome { exit_code, output })
}

async fn forward_lines<R>(reader: R, stream: OutputStream, tx: mpsc::UnboundedSender<OutputLine>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer).await {
            Ok(0) => break,
            Ok(_) => {
                let text = decode_line(&buffer);
                if tx.send(OutputLine { stream, text }).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::warn!("Failed to read child {:?}: {}", stream, e);
                break;
            }
        }
    }
}

/// Lossy UTF-8 decode with the line terminator removed
fn decode_line(raw: &[u8]) -> String {
    let mut end = raw.len();
    if end > 0 && raw[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && raw[end - 1] == b'\r' {
        end -= 1;
    }
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Numeric exit code; a signal-terminated child reports minus the signal number
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
