//! TUI event loop and handling

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use crate::cli::tui::main_app::{App, PAGE_SCROLL};
use crate::cli::tui::ui::ui;
use crate::models::{AppEvent, FocusedPane};

/// Run the main TUI event loop
pub async fn run_tui_event_loop(mut app: App, paste_on_start: bool) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event channel
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Spawn tick generator
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    if paste_on_start {
        app.request_paste(tx.clone(), true);
    }

    // Main loop
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| ui(f, &mut app)) {
            break Err(e.into());
        }

        tokio::select! {
            // Handle crossterm events
            _ = tokio::task::spawn_blocking(|| event::poll(Duration::from_millis(50))) => {
                match event::poll(Duration::from_millis(0)) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            handle_key_event(&mut app, key, &tx);
                        }
                        Ok(_) => {}
                        Err(e) => break Err(e.into()),
                    },
                    Ok(false) => {}
                    Err(e) => break Err(e.into()),
                }
            }

            // Handle app events
            Some(event) = rx.recv() => {
                app.handle_event(event, &tx);
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Cleanup
    app.shutdown().await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Apply one key press to the app state
pub fn handle_key_event(app: &mut App, key: KeyEvent, tx: &mpsc::UnboundedSender<AppEvent>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit works everywhere, modal or not
    if ctrl && matches!(key.code, KeyCode::Char('w') | KeyCode::Char('q') | KeyCode::Char('c')) {
        app.should_quit = true;
        return;
    }

    if app.show_tool_warning {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.acknowledge_tool_warning();
        }
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::F(5) => return app.start_cycle(tx.clone()),
        KeyCode::Char('r') if ctrl => return app.start_cycle(tx.clone()),
        KeyCode::Char('v') if ctrl => return app.request_paste(tx.clone(), false),
        KeyCode::F(1) => {
            app.show_help = true;
            return;
        }
        KeyCode::F(2) => return app.toggle_language(),
        KeyCode::F(3) => return app.toggle_wall(),
        KeyCode::F(4) => return app.toggle_debug(),
        KeyCode::F(6) => return app.toggle_optimize(),
        KeyCode::Tab => return app.next_pane(),
        KeyCode::BackTab => return app.previous_pane(),
        _ => {}
    }

    match app.focused_pane {
        FocusedPane::Editor => handle_editor_key(app, key),
        FocusedPane::IncludePath | FocusedPane::LibraryPath | FocusedPane::Library => {
            if let Some(field) = app.focused_field_mut() {
                match key.code {
                    KeyCode::Char(c) if !ctrl => field.push(c),
                    KeyCode::Backspace => {
                        field.pop();
                    }
                    KeyCode::Esc => field.clear(),
                    _ => {}
                }
            }
        }
        FocusedPane::CompileOutput | FocusedPane::RunOutput => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
            KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
            KeyCode::Home => app.scroll_to_top(),
            KeyCode::End => app.scroll_to_bottom(),
            _ => {}
        },
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let editor = &mut app.editor;

    match key.code {
        KeyCode::Char('t') if ctrl => editor.insert_tab(),
        KeyCode::Char('l') if ctrl => editor.clear(),
        KeyCode::Char(c) if !ctrl => editor.insert_char(c),
        KeyCode::Enter => editor.newline(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.home(),
        KeyCode::End => editor.end(),
        _ => {}
    }
}
