//! TUI-specific data models

use ratatui::style::Color;

/// Which pane is currently focused in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    IncludePath,
    LibraryPath,
    Library,
    CompileOutput,
    RunOutput,
}

impl FocusedPane {
    const ORDER: [FocusedPane; 6] = [
        FocusedPane::Editor,
        FocusedPane::IncludePath,
        FocusedPane::LibraryPath,
        FocusedPane::Library,
        FocusedPane::CompileOutput,
        FocusedPane::RunOutput,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn is_text_field(&self) -> bool {
        matches!(
            self,
            FocusedPane::IncludePath | FocusedPane::LibraryPath | FocusedPane::Library
        )
    }
}

/// State of the current compile-and-run cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    Idle,
    Compiling,
    Running,
    Succeeded,
    CompileFailed,
    RunFailed,
    Error,
}

impl CycleStatus {
    pub fn color(&self) -> Color {
        match self {
            CycleStatus::Idle => Color::Gray,
            CycleStatus::Compiling => Color::Yellow,
            CycleStatus::Running => Color::Cyan,
            CycleStatus::Succeeded => Color::Green,
            CycleStatus::CompileFailed | CycleStatus::RunFailed | CycleStatus::Error => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CycleStatus::Idle => "⏳",
            CycleStatus::Compiling => "⚙️ ",
            CycleStatus::Running => "▶️ ",
            CycleStatus::Succeeded => "✅",
            CycleStatus::CompileFailed | CycleStatus::RunFailed => "❌",
            CycleStatus::Error => "⚠️ ",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, CycleStatus::Compiling | CycleStatus::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut pane = FocusedPane::Editor;
        for _ in 0..6 {
            pane = pane.next();
        }
        assert_eq!(pane, FocusedPane::Editor);
        assert_eq!(FocusedPane::Editor.previous(), FocusedPane::RunOutput);
        assert!(FocusedPane::Library.is_text_field());
        assert!(!FocusedPane::Editor.is_text_field());
    }
}
