//! TUI rendering logic

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::cli::tui::main_app::App;
use crate::models::{FocusedPane, Language, Phase};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &mut App) {
    // Main layout: work area, option fields, help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[0]);

    let output_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_editor(f, app, chunks[0]);
    render_output(f, app, Phase::Compile, output_chunks[0]);
    render_output(f, app, Phase::Run, output_chunks[1]);
    render_options(f, app, main_chunks[1]);
    render_help_bar(f, app, main_chunks[2]);

    // Tool warning modal
    if app.show_tool_warning {
        let area = centered_rect(60, 30, f.area());
        f.render_widget(Clear, area);

        let warning_lines: Vec<Line> = app
            .tool_warning_message
            .split('\n')
            .map(Line::from)
            .collect();

        let warning_paragraph = Paragraph::new(warning_lines)
            .block(
                Block::default()
                    .title("Compiler Notice")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().bg(Color::Black))
            .wrap(Wrap { trim: true });

        f.render_widget(warning_paragraph, area);
    }
    // Help popup
    else if app.show_help {
        let area = centered_rect(60, 60, f.area());
        f.render_widget(Clear, area);

        let help_text = vec![
            Line::from("cppexec Help"),
            Line::from(""),
            Line::from("Running:"),
            Line::from("F5 / Ctrl+R   Compile and run the editor contents"),
            Line::from("Ctrl+V        Paste clipboard into the editor"),
            Line::from(""),
            Line::from("Options:"),
            Line::from("F2            Toggle C99 / C++98"),
            Line::from("F3            Toggle -Wall"),
            Line::from("F4            Toggle -g"),
            Line::from("F6            Toggle -O2"),
            Line::from(""),
            Line::from("Editing:"),
            Line::from("Tab/Shift+Tab Switch pane"),
            Line::from("Ctrl+T        Indent (editor)"),
            Line::from("Ctrl+L        Clear editor"),
            Line::from("Esc           Clear focused field"),
            Line::from("PgUp/PgDn     Scroll focused output"),
            Line::from(""),
            Line::from("Ctrl+W/Ctrl+Q Quit"),
        ];

        let help_paragraph = Paragraph::new(help_text)
            .block(Block::default().title("Help").borders(Borders::ALL))
            .style(Style::default().bg(Color::Black));

        f.render_widget(help_paragraph, area);
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}

/// First visible row/column that keeps `cursor` inside a viewport of `size`
pub fn scroll_offset(cursor: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        cursor.saturating_sub(size - 1)
    }
}

/// Terminal coordinate for a buffer position, saturating on huge buffers
pub fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn render_editor(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_pane == FocusedPane::Editor;
    let title = format!(
        "Source ({}){}",
        app.options.language.name(),
        if focused { " [FOCUSED]" } else { "" }
    );

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;
    let (row, col) = app.editor.cursor();
    let top = scroll_offset(row, inner_height);
    let left = scroll_offset(col, inner_width);

    let lines: Vec<Line> = app
        .editor
        .lines()
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();

    let editor = Paragraph::new(lines)
        .block(pane_block(title, focused))
        .scroll((to_u16(top), to_u16(left)));
    f.render_widget(editor, area);

    if focused && !app.show_help && !app.show_tool_warning {
        f.set_cursor_position((
            area.x.saturating_add(1).saturating_add(to_u16(col - left)),
            area.y.saturating_add(1).saturating_add(to_u16(row - top)),
        ));
    }
}

fn exit_span(code: Option<i32>) -> Span<'static> {
    match code {
        Some(0) => Span::styled("exit 0", Style::default().fg(Color::Green)),
        Some(code) => Span::styled(format!("exit {}", code), Style::default().fg(Color::Red)),
        None => Span::styled("exit -", Style::default().fg(Color::Gray)),
    }
}

fn render_output(f: &mut Frame, app: &mut App, phase: Phase, area: Rect) {
    let (pane, exit) = match phase {
        Phase::Compile => (FocusedPane::CompileOutput, app.compile_exit),
        Phase::Run => (FocusedPane::RunOutput, app.run_exit),
    };

    let len = app.output(phase).len();
    let scroll = app.scroll_mut(phase);
    scroll.height = area.height.saturating_sub(2) as usize;
    scroll.sync(len);
    let offset = scroll.offset;
    let focused = app.focused_pane == pane;

    let title = Line::from(vec![
        Span::raw(format!(" {} output ", phase.name())),
        Span::raw("| "),
        exit_span(exit),
        Span::raw(if focused { " [FOCUSED] " } else { " " }),
    ]);

    let mut block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let paragraph = Paragraph::new(app.output(phase).styled_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((to_u16(offset), 0));

    f.render_widget(paragraph, area);
}

fn checkbox(label: &str, checked: bool) -> Span<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if checked {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{} {}  ", mark, label), style)
}

fn render_options(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let options = &app.options;
    let toggles = Paragraph::new(Line::from(vec![
        checkbox("C99", options.language == Language::C99),
        checkbox("C++98", options.language == Language::Cpp98),
        checkbox("-Wall", options.wall),
        checkbox("-g", options.debug),
        checkbox("-O2", options.optimize),
    ]))
    .block(Block::default().title("Options").borders(Borders::ALL));
    f.render_widget(toggles, chunks[0]);

    let fields = [
        (FocusedPane::IncludePath, "Include (-I)", &options.include_path),
        (FocusedPane::LibraryPath, "Library path (-L)", &options.library_path),
        (FocusedPane::Library, "Library (-l)", &options.library),
    ];

    for ((pane, title, value), area) in fields.into_iter().zip(chunks.iter().skip(1)) {
        let focused = app.focused_pane == pane;
        let inner_width = area.width.saturating_sub(2) as usize;
        let len = value.chars().count();
        let left = scroll_offset(len, inner_width);

        let field = Paragraph::new(value.as_str())
            .block(pane_block(title.to_string(), focused))
            .scroll((0, to_u16(left)));
        f.render_widget(field, *area);

        if focused && !app.show_help && !app.show_tool_warning {
            f.set_cursor_position((
                area.x.saturating_add(1).saturating_add(to_u16(len - left)),
                area.y.saturating_add(1),
            ));
        }
    }
}

fn render_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut help_text = vec![
        Span::styled(
            format!("{} ", app.status.symbol()),
            Style::default().fg(app.status.color()),
        ),
        Span::styled(
            format!("{} ", app.status_message),
            Style::default()
                .fg(app.status.color())
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(finished) = app.last_finished {
        help_text.push(Span::styled(
            format!("({}) ", finished.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    if !app.is_busy() {
        help_text.push(Span::styled(
            "[F5]Compile & Run ",
            Style::default().fg(Color::LightYellow),
        ));
    }
    help_text.extend(vec![
        Span::styled("[F2]Lang ", Style::default().fg(Color::Cyan)),
        Span::styled("[Tab]Switch Pane ", Style::default().fg(Color::White)),
        Span::styled("[F1]Help ", Style::default().fg(Color::Blue)),
        Span::styled("[Ctrl+W]Quit ", Style::default().fg(Color::Red)),
    ]);

    let title = if app.last_command.is_empty() {
        "Status".to_string()
    } else {
        format!("Status | {}", app.last_command.join(" "))
    };

    let help_paragraph = Paragraph::new(Line::from(help_text))
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
