//! Unit tests for TUI functionality

use super::event_loop::handle_key_event;
use super::main_app::App;
use crate::models::{
    AppEvent, CompileOptions, CycleReport, CycleStatus, FocusedPane, Language, OutputLine, Phase,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

fn test_app(source: Option<&str>) -> App {
    let options = CompileOptions {
        // Always present on unix, keeps the tool warning out of the way
        compiler: "/bin/sh".to_string(),
        ..Default::default()
    };
    App::new(options, "/bin/echo".to_string(), source)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_initial_state() {
    let app = test_app(Some("int main(void) { return 0; }"));

    assert_eq!(app.focused_pane, FocusedPane::Editor);
    assert_eq!(app.status, CycleStatus::Idle);
    assert!(app.compile_exit.is_none());
    assert!(app.run_exit.is_none());
    assert_eq!(app.editor.text(), "int main(void) { return 0; }");
}

#[test]
fn test_missing_compiler_shows_warning() {
    let options = CompileOptions {
        compiler: "/nonexistent/cppexec-gcc".to_string(),
        ..Default::default()
    };
    let mut app = App::new(options, "/usr/bin/xsel".to_string(), None);
    assert!(app.show_tool_warning);
    assert!(app.tool_warning_message.contains("/nonexistent/cppexec-gcc"));

    let (tx, _rx) = mpsc::unbounded_channel();
    // Keys are swallowed by the modal until it is acknowledged
    handle_key_event(&mut app, key(KeyCode::Char('x')), &tx);
    assert!(app.editor.is_empty());
    handle_key_event(&mut app, key(KeyCode::Enter), &tx);
    assert!(!app.show_tool_warning);
}

#[test]
fn test_begin_cycle_clears_previous_output() {
    let mut app = test_app(Some("x"));
    app.compile_output.push(OutputLine::stdout("old"));
    app.run_output.push(OutputLine::stderr("old"));
    app.compile_exit = Some(0);
    app.run_exit = Some(1);

    let (source, options) = app.begin_cycle().expect("idle app should start a cycle");
    assert_eq!(source, "x");
    assert_eq!(options.language, Language::C99);
    assert!(app.compile_output.is_empty());
    assert!(app.run_output.is_empty());
    assert!(app.compile_exit.is_none());
    assert!(app.run_exit.is_none());
    assert_eq!(app.status, CycleStatus::Compiling);

    // Only one cycle in flight
    assert!(app.begin_cycle().is_none());
}

#[test]
fn test_events_drive_state() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();
    app.begin_cycle();

    app.handle_event(
        AppEvent::CycleStarted(vec!["/usr/bin/gcc".into(), "-std=c99".into()]),
        &tx,
    );
    app.handle_event(
        AppEvent::Output(Phase::Compile, OutputLine::stderr("warning: unused")),
        &tx,
    );
    app.handle_event(AppEvent::PhaseFinished(Phase::Compile, 0), &tx);
    assert_eq!(app.status, CycleStatus::Running);
    assert_eq!(app.compile_exit, Some(0));

    app.handle_event(
        AppEvent::Output(Phase::Run, OutputLine::stdout("hello")),
        &tx,
    );
    app.handle_event(AppEvent::PhaseFinished(Phase::Run, 0), &tx);
    app.handle_event(AppEvent::CycleFinished(Box::default()), &tx);

    assert_eq!(app.status, CycleStatus::Succeeded);
    assert_eq!(app.run_exit, Some(0));
    assert_eq!(app.run_output.stdout_text(), "hello");
    assert_eq!(app.compile_output.stderr_text(), "warning: unused");
    assert_eq!(app.last_command[1], "-std=c99");
    assert!(app.last_finished.is_some());
}

#[test]
fn test_compile_failure_leaves_run_exit_empty() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();
    app.begin_cycle();

    app.handle_event(AppEvent::PhaseFinished(Phase::Compile, 1), &tx);
    app.handle_event(
        AppEvent::CycleFinished(Box::new(CycleReport {
            compile_exit: Some(1),
            ..Default::default()
        })),
        &tx,
    );

    assert_eq!(app.status, CycleStatus::CompileFailed);
    assert_eq!(app.compile_exit, Some(1));
    assert!(app.run_exit.is_none());
    assert!(!app.is_busy());
}

#[test]
fn test_cycle_failure_is_shown_in_compile_pane() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();
    app.begin_cycle();

    app.handle_event(
        AppEvent::CycleFailed("Failed to start /usr/bin/gcc: not found".to_string()),
        &tx,
    );
    assert_eq!(app.status, CycleStatus::Error);
    assert!(app.compile_output.lines[0].is_stderr());
    assert!(app.begin_cycle().is_some());
}

#[test]
fn test_option_keys() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();

    handle_key_event(&mut app, key(KeyCode::F(2)), &tx);
    handle_key_event(&mut app, key(KeyCode::F(3)), &tx);
    handle_key_event(&mut app, key(KeyCode::F(4)), &tx);
    handle_key_event(&mut app, key(KeyCode::F(6)), &tx);

    assert_eq!(app.options.language, Language::Cpp98);
    assert!(app.options.wall);
    assert!(app.options.debug);
    assert!(app.options.optimize);
}

#[test]
fn test_editor_and_field_typing() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();

    for c in "ab".chars() {
        handle_key_event(&mut app, key(KeyCode::Char(c)), &tx);
    }
    handle_key_event(&mut app, key(KeyCode::Enter), &tx);
    handle_key_event(&mut app, key(KeyCode::Char('c')), &tx);
    assert_eq!(app.editor.text(), "ab\nc");

    // Editor -> include path -> library path -> library
    handle_key_event(&mut app, key(KeyCode::Tab), &tx);
    handle_key_event(&mut app, key(KeyCode::Tab), &tx);
    handle_key_event(&mut app, key(KeyCode::Tab), &tx);
    assert_eq!(app.focused_pane, FocusedPane::Library);
    for c in "mx".chars() {
        handle_key_event(&mut app, key(KeyCode::Char(c)), &tx);
    }
    handle_key_event(&mut app, key(KeyCode::Backspace), &tx);
    assert_eq!(app.options.library, "m");
    assert_eq!(app.editor.text(), "ab\nc");
}

#[test]
fn test_output_scrolling_is_bounded() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();
    for i in 0..5 {
        app.compile_output.push(OutputLine::stdout(format!("line {}", i)));
    }
    app.focused_pane = FocusedPane::CompileOutput;

    handle_key_event(&mut app, key(KeyCode::PageDown), &tx);
    assert_eq!(app.compile_scroll.offset, 4);
    handle_key_event(&mut app, key(KeyCode::Up), &tx);
    assert_eq!(app.compile_scroll.offset, 3);
    handle_key_event(&mut app, key(KeyCode::Home), &tx);
    assert_eq!(app.compile_scroll.offset, 0);
    handle_key_event(&mut app, key(KeyCode::Up), &tx);
    assert_eq!(app.compile_scroll.offset, 0);
}

#[test]
fn test_output_pane_follows_new_lines_until_scrolled_back() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();
    app.begin_cycle();
    app.compile_scroll.height = 3;

    for i in 0..10 {
        app.handle_event(
            AppEvent::Output(Phase::Compile, OutputLine::stdout(format!("line {}", i))),
            &tx,
        );
    }
    // Last three lines in view
    assert_eq!(app.compile_scroll.offset, 7);

    app.focused_pane = FocusedPane::CompileOutput;
    handle_key_event(&mut app, key(KeyCode::Up), &tx);
    assert_eq!(app.compile_scroll.offset, 6);
    assert!(!app.compile_scroll.follow);

    app.handle_event(
        AppEvent::Output(Phase::Compile, OutputLine::stdout("line 10")),
        &tx,
    );
    assert_eq!(app.compile_scroll.offset, 6);

    handle_key_event(&mut app, key(KeyCode::End), &tx);
    assert!(app.compile_scroll.follow);
    assert_eq!(app.compile_scroll.offset, 8);
}

#[tokio::test]
async fn test_second_trigger_while_busy_is_refused() {
    let mut app = test_app(None);
    let (tx, mut rx) = mpsc::unbounded_channel();
    app.begin_cycle();

    app.start_cycle(tx.clone());
    let event = rx.recv().await.expect("warning event");
    assert!(matches!(&event, AppEvent::Warning(msg) if msg.contains("already in progress")));

    app.handle_event(event, &tx);
    assert!(app.status_message.contains("already in progress"));
    assert_eq!(app.status, CycleStatus::Compiling);
}

#[tokio::test]
async fn test_quit_mid_run_kills_program_and_removes_workspace() {
    let gcc = "/usr/bin/gcc";
    if !std::path::Path::new(gcc).is_file() {
        println!("⚠️  {} not found, skipping compiler test", gcc);
        return;
    }

    let options = CompileOptions {
        compiler: gcc.to_string(),
        ..Default::default()
    };
    let mut app = App::new(options, "/bin/echo".to_string(), Some("int main(void){for(;;);}"));
    let (tx, mut rx) = mpsc::unbounded_channel();

    app.start_cycle(tx.clone());

    let mut source = None;
    while let Some(event) = rx.recv().await {
        if let AppEvent::CycleStarted(cmd) = &event {
            source = cmd.iter().find(|arg| arg.ends_with("code.c")).cloned();
        }
        let compiled = matches!(event, AppEvent::PhaseFinished(Phase::Compile, _));
        app.handle_event(event, &tx);
        if compiled {
            break;
        }
    }
    assert_eq!(app.status, CycleStatus::Running);

    let source = std::path::PathBuf::from(source.expect("cycle should have started"));
    let workspace = source.parent().unwrap().to_path_buf();
    assert!(workspace.exists());

    handle_key_event(&mut app, ctrl('q'), &tx);
    assert!(app.should_quit);
    app.shutdown().await;

    assert!(!workspace.exists());
    // The endless loop never finishes on its own
    while let Ok(event) = rx.try_recv() {
        assert!(!matches!(event, AppEvent::PhaseFinished(Phase::Run, _)));
    }
}

#[test]
fn test_quit_keys() {
    let mut app = test_app(None);
    let (tx, _rx) = mpsc::unbounded_channel();
    handle_key_event(&mut app, ctrl('w'), &tx);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_paste_then_run_starts_cycle() {
    let mut app = test_app(None);
    let (tx, mut rx) = mpsc::unbounded_channel();

    // /bin/echo stands in for xsel and prints "--clipboard"
    app.request_paste(tx.clone(), true);
    let event = rx.recv().await.expect("clipboard event");
    match &event {
        AppEvent::ClipboardText(text) => assert_eq!(text, "--clipboard"),
        other => panic!("Expected ClipboardText, got: {:?}", other),
    }

    app.handle_event(event, &tx);
    assert_eq!(app.editor.text(), "--clipboard");
    assert!(!app.run_after_paste);
    assert_eq!(app.status, CycleStatus::Compiling);
}

#[test]
fn test_terminal_coordinates_saturate() {
    use super::ui::{scroll_offset, to_u16};

    assert_eq!(to_u16(42), 42);
    assert_eq!(to_u16(70_000), u16::MAX);
    assert_eq!(to_u16(scroll_offset(100_000, 20)), u16::MAX);
}
