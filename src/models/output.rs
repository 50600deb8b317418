//! Captured process output

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use serde::{Deserialize, Serialize};

/// Which pipe a line was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl OutputStream {
    pub fn color(&self) -> Color {
        match self {
            OutputStream::Stdout => Color::Reset,
            OutputStream::Stderr => Color::Red,
        }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.color())
    }
}

/// One decoded line, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub stream: OutputStream,
    pub text: String,
}

impl OutputLine {
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stream: OutputStream::Stdout,
            text: text.into(),
        }
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self {
            stream: OutputStream::Stderr,
            text: text.into(),
        }
    }

    pub fn is_stderr(&self) -> bool {
        self.stream == OutputStream::Stderr
    }

    /// HTML fragment for this line; stderr is wrapped in a red span.
    pub fn to_html(&self) -> String {
        let escaped = escape_html(&self.text);
        match self.stream {
            OutputStream::Stdout => format!("{}<br>", escaped),
            OutputStream::Stderr => {
                format!("<span style=\"color:red\">{}</span><br>", escaped)
            }
        }
    }
}

/// Ordered output of one process, both streams interleaved in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBuffer {
    pub lines: Vec<OutputLine>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn stdout_text(&self) -> String {
        self.joined(OutputStream::Stdout)
    }

    pub fn stderr_text(&self) -> String {
        self.joined(OutputStream::Stderr)
    }

    fn joined(&self, stream: OutputStream) -> String {
        self.lines
            .iter()
            .filter(|l| l.stream == stream)
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_html(&self) -> String {
        self.lines.iter().map(OutputLine::to_html).collect()
    }

    /// Lines styled for the terminal, stderr in red
    pub fn styled_lines(&self) -> Vec<Line<'_>> {
        self.lines
            .iter()
            .map(|l| Line::from(Span::styled(l.text.as_str(), l.stream.style())))
            .collect()
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
