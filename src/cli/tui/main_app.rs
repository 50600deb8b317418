//! Main TUI application state and logic

use chrono::{DateTime, Local};
use std::path::Path;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::cli::tui::editor::TextEditor;
use crate::clipboard::read_clipboard;
use crate::models::{
    AppEvent, CompileOptions, CycleStatus, FocusedPane, OutputBuffer, OutputLine, Phase,
};
use crate::runner::compile_and_run;
use crate::utils::logging::TuiLogger;

/// Lines moved per PgUp/PgDn in an output pane
pub const PAGE_SCROLL: usize = 10;

/// Scroll position of one output pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneScroll {
    /// First visible line
    pub offset: usize,
    /// Keep the newest line in view while output arrives
    pub follow: bool,
    /// Inner height of the pane at the last draw
    pub height: usize,
}

impl Default for PaneScroll {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            height: 0,
        }
    }
}

impl PaneScroll {
    fn bottom(&self, len: usize) -> usize {
        len.saturating_sub(self.height.max(1))
    }

    pub fn up(&mut self, lines: usize) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scrolling back down to the last page resumes following
    pub fn down(&mut self, lines: usize, len: usize) {
        let bottom = self.bottom(len);
        self.offset = (self.offset + lines).min(bottom);
        self.follow = self.offset == bottom;
    }

    pub fn to_top(&mut self) {
        self.follow = false;
        self.offset = 0;
    }

    pub fn to_bottom(&mut self, len: usize) {
        self.follow = true;
        self.offset = self.bottom(len);
    }

    /// Re-pin to the last page after output grew or the pane was resized
    pub fn sync(&mut self, len: usize) {
        if self.follow {
            self.offset = self.bottom(len);
        }
    }
}

pub struct App {
    pub editor: TextEditor,
    pub options: CompileOptions,
    pub clipboard_command: String,
    pub focused_pane: FocusedPane,
    pub compile_output: OutputBuffer,
    pub run_output: OutputBuffer,
    pub compile_exit: Option<i32>,
    pub run_exit: Option<i32>,
    pub compile_scroll: PaneScroll,
    pub run_scroll: PaneScroll,
    pub last_command: Vec<String>,
    pub status: CycleStatus,
    pub status_message: String,
    pub last_finished: Option<DateTime<Local>>,
    pub show_help: bool,
    pub show_tool_warning: bool,
    pub tool_warning_message: String,
    /// Start a cycle as soon as pasted clipboard text arrives
    pub run_after_paste: bool,
    pub should_quit: bool,
    cycle_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(options: CompileOptions, clipboard_command: String, source: Option<&str>) -> Self {
        let editor = source.map(TextEditor::from_text).unwrap_or_default();

        let mut app = Self {
            editor,
            options,
            clipboard_command,
            focused_pane: FocusedPane::Editor,
            compile_output: OutputBuffer::new(),
            run_output: OutputBuffer::new(),
            compile_exit: None,
            run_exit: None,
            compile_scroll: PaneScroll::default(),
            run_scroll: PaneScroll::default(),
            last_command: Vec::new(),
            status: CycleStatus::Idle,
            status_message: "Ready. Press F5 to compile and run.".to_string(),
            last_finished: None,
            show_help: false,
            show_tool_warning: false,
            tool_warning_message: String::new(),
            run_after_paste: false,
            should_quit: false,
            cycle_task: None,
        };
        app.check_compiler();
        app
    }

    /// Raise the tool warning modal when the compiler cannot be found
    pub fn check_compiler(&mut self) {
        let compiler = &self.options.compiler;
        let found = if Path::new(compiler).is_absolute() {
            Path::new(compiler).is_file()
        } else {
            which::which(compiler).is_ok()
        };

        if found {
            self.show_tool_warning = false;
        } else {
            log::warn!("Compiler not found: {}", compiler);
            self.show_tool_warning = true;
            self.tool_warning_message = format!(
                "Compiler not found: {}\n\nInstall gcc or pass --compiler <PATH>.\nCompiling will fail until it is available.\n\nPress Enter to continue.",
                compiler
            );
        }
    }

    pub fn acknowledge_tool_warning(&mut self) {
        self.show_tool_warning = false;
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    /// Reset output state for a new cycle and hand back what it should run
    /// with. `None` while another cycle is still in flight.
    pub fn begin_cycle(&mut self) -> Option<(String, CompileOptions)> {
        if self.is_busy() {
            return None;
        }

        self.compile_output.clear();
        self.run_output.clear();
        self.compile_exit = None;
        self.run_exit = None;
        self.compile_scroll = PaneScroll::default();
        self.run_scroll = PaneScroll::default();
        self.status = CycleStatus::Compiling;
        self.status_message = format!("Compiling as {}...", self.options.language.name());

        Some((self.editor.text(), self.options.clone()))
    }

    /// Start a compile-and-run cycle in the background
    pub fn start_cycle(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        let Some((source, options)) = self.begin_cycle() else {
            TuiLogger::new(tx)
                .warning("A compile-and-run cycle is already in progress".to_string());
            return;
        };

        self.cycle_task = Some(tokio::spawn(async move {
            // Outcome arrives as CycleFinished / CycleFailed on the channel
            let _ = compile_and_run(&source, &options, tx).await;
        }));
    }

    /// Cancel a cycle still in flight and wait for it to unwind. Dropping the
    /// cycle kills its child process and removes its workspace.
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.cycle_task.take() {
            if !task.is_finished() {
                log::info!("Cancelling running compile-and-run cycle");
            }
            task.abort();
            let _ = task.await;
        }
    }

    /// Read the clipboard in the background and append it to the editor
    pub fn request_paste(&mut self, tx: mpsc::UnboundedSender<AppEvent>, run_after: bool) {
        self.run_after_paste = run_after;
        self.status_message = "Reading clipboard...".to_string();

        let command = self.clipboard_command.clone();
        tokio::spawn(async move {
            let event = match read_clipboard(&command).await {
                Ok(text) => AppEvent::ClipboardText(text),
                Err(e) => AppEvent::ClipboardFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::UnboundedSender<AppEvent>) {
        match event {
            AppEvent::CycleStarted(command) => {
                self.last_command = command;
            }
            AppEvent::Output(phase, line) => {
                self.output_mut(phase).push(line);
                let len = self.output(phase).len();
                self.scroll_mut(phase).sync(len);
            }
            AppEvent::PhaseFinished(Phase::Compile, code) => {
                self.compile_exit = Some(code);
                if code == 0 {
                    self.status = CycleStatus::Running;
                    self.status_message = "Running...".to_string();
                } else {
                    self.status = CycleStatus::CompileFailed;
                    self.status_message = format!("Compilation failed with exit code {}", code);
                }
            }
            AppEvent::PhaseFinished(Phase::Run, code) => {
                self.run_exit = Some(code);
                self.status = if code == 0 {
                    CycleStatus::Succeeded
                } else {
                    CycleStatus::RunFailed
                };
                self.status_message = format!("Program exited with code {}", code);
            }
            AppEvent::CycleFinished(report) => {
                self.last_finished = Some(Local::now());
                log::debug!(
                    "Cycle finished: compile {:?}, run {:?}",
                    report.compile_exit,
                    report.run_exit
                );
            }
            AppEvent::CycleFailed(message) => {
                self.compile_output.push(OutputLine::stderr(message.clone()));
                self.status = CycleStatus::Error;
                self.status_message = message;
                self.last_finished = Some(Local::now());
            }
            AppEvent::ClipboardText(text) => {
                self.editor.append_text(&text);
                TuiLogger::new(tx.clone())
                    .info(format!("Pasted {} line(s) from clipboard", text.lines().count()));
                if std::mem::take(&mut self.run_after_paste) {
                    self.start_cycle(tx.clone());
                }
            }
            AppEvent::ClipboardFailed(message) => {
                self.run_after_paste = false;
                TuiLogger::new(tx.clone()).error(format!("Clipboard: {}", message));
            }
            AppEvent::Error(message) | AppEvent::Warning(message) | AppEvent::Info(message) => {
                self.status_message = message;
            }
            AppEvent::Tick => {}
        }
    }

    pub fn output(&self, phase: Phase) -> &OutputBuffer {
        match phase {
            Phase::Compile => &self.compile_output,
            Phase::Run => &self.run_output,
        }
    }

    fn output_mut(&mut self, phase: Phase) -> &mut OutputBuffer {
        match phase {
            Phase::Compile => &mut self.compile_output,
            Phase::Run => &mut self.run_output,
        }
    }

    /// Text of the focused single-line field, if a field is focused
    pub fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focused_pane {
            FocusedPane::IncludePath => Some(&mut self.options.include_path),
            FocusedPane::LibraryPath => Some(&mut self.options.library_path),
            FocusedPane::Library => Some(&mut self.options.library),
            _ => None,
        }
    }

    pub fn next_pane(&mut self) {
        self.focused_pane = self.focused_pane.next();
    }

    pub fn previous_pane(&mut self) {
        self.focused_pane = self.focused_pane.previous();
    }

    pub fn toggle_language(&mut self) {
        self.options.language = self.options.language.toggled();
    }

    pub fn toggle_wall(&mut self) {
        self.options.wall = !self.options.wall;
    }

    pub fn toggle_debug(&mut self) {
        self.options.debug = !self.options.debug;
    }

    pub fn toggle_optimize(&mut self) {
        self.options.optimize = !self.options.optimize;
    }

    pub fn scroll_mut(&mut self, phase: Phase) -> &mut PaneScroll {
        match phase {
            Phase::Compile => &mut self.compile_scroll,
            Phase::Run => &mut self.run_scroll,
        }
    }

    fn focused_phase(&self) -> Option<Phase> {
        match self.focused_pane {
            FocusedPane::CompileOutput => Some(Phase::Compile),
            FocusedPane::RunOutput => Some(Phase::Run),
            _ => None,
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        if let Some(phase) = self.focused_phase() {
            self.scroll_mut(phase).up(lines);
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        if let Some(phase) = self.focused_phase() {
            let len = self.output(phase).len();
            self.scroll_mut(phase).down(lines, len);
        }
    }

    pub fn scroll_to_top(&mut self) {
        if let Some(phase) = self.focused_phase() {
            self.scroll_mut(phase).to_top();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if let Some(phase) = self.focused_phase() {
            let len = self.output(phase).len();
            self.scroll_mut(phase).to_bottom(len);
        }
    }
}
