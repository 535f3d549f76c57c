use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use biscuit_core::console::Console;
use biscuit_core::logging::{LogEntry, LogLevel};

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Green,
        LogLevel::Debug => Color::Cyan,
        LogLevel::Trace => Color::DarkGray,
    }
}

/// Render the drop-down console overlay over the top half of the screen.
///
/// Three bands: a title bar with the TPS readout and scroll state, the
/// colour-coded log area, and the input line. `fraction` is the slide
/// progress from [`Console::overlay_fraction`]; the cursor is only placed
/// once the console is fully open.
pub fn render_console(
    f: &mut Frame,
    area: Rect,
    console: &Console,
    tps: f64,
    fraction: f64,
    show_cursor: bool,
) {
    let max_height = area.height / 2;
    let height = ((max_height as f64) * fraction).round() as u16;
    // Title, one log row and the input line need three rows. Hold the
    // overlay at that minimum while it slides, skip it entirely at zero.
    let height = if height < 3 {
        if fraction <= 0.0 {
            return;
        }
        3
    } else {
        height
    };

    let overlay = Rect { height, ..area };
    f.render_widget(Clear, overlay);

    let bands = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(overlay);

    render_title(f, bands[0], console, tps);
    render_log(f, bands[1], console);
    render_input(f, bands[2], console, show_cursor);
}

fn render_title(f: &mut Frame, area: Rect, console: &Console, tps: f64) {
    let mut spans = vec![
        Span::styled(
            " CONSOLE ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  TPS: {:.1}  ", tps)),
    ];
    if console.scroll_offset() > 0 {
        spans.push(Span::styled(
            format!("[scrolled +{}]  ", console.scroll_offset()),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(Span::styled(
        "~ to close",
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}

fn render_log(f: &mut Frame, area: Rect, console: &Console) {
    let entries = console.log_lines();
    let visible = area.height as usize;
    // Window ends scroll_offset lines above the tail and shows at most one
    // screenful before that.
    let end = entries.len().saturating_sub(console.scroll_offset());
    let start = end.saturating_sub(visible);

    let lines: Vec<Line> = entries
        .iter()
        .skip(start)
        .take(end - start)
        .map(log_line)
        .collect();

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .style(Style::default().bg(Color::Black));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn log_line(entry: &LogEntry) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!(" {:5} ", entry.level),
            Style::default()
                .fg(level_color(entry.level))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", entry.target),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(entry.message.as_str()),
    ])
}

fn render_input(f: &mut Frame, area: Rect, console: &Console, show_cursor: bool) {
    let prompt = Line::from(vec![
        Span::styled(
            "> ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(console.input_buffer.as_str()),
    ]);
    f.render_widget(
        Paragraph::new(prompt).style(Style::default().bg(Color::Black).fg(Color::White)),
        area,
    );

    // Position the terminal cursor in the input field only when fully open.
    if show_cursor {
        let col = console.input_buffer[..console.cursor_pos].width() as u16;
        f.set_cursor_position((area.x + 2 + col, area.y));
    }
}
