use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use biscuit_sim::{Action, ActivityItem, ActivityLog};

use crate::format::format_relative;

/// Marker colour per action kind, matching the stats-panel key hints.
fn marker_color(action: Action) -> Color {
    match action {
        Action::Feed => Color::Green,
        Action::Pet => Color::Magenta,
        Action::Walk => Color::Cyan,
    }
}

/// Render the newest-first activity feed.
///
/// Relative timestamps are computed against `now` at draw time, so rows age
/// naturally with every frame.
pub fn render_feed(f: &mut Frame, area: Rect, log: &ActivityLog, now: Instant) {
    let block = Block::default().borders(Borders::ALL).title("ACTIVITY");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if log.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "No activity yet. Try [f]eeding the dog.",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(hint, inner);
        return;
    }

    let lines: Vec<Line> = log
        .items()
        .take(inner.height as usize)
        .map(|item| feed_row(item, now))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn feed_row(item: &ActivityItem, now: Instant) -> Line<'_> {
    let elapsed = now.saturating_duration_since(item.at);
    Line::from(vec![
        Span::styled("● ", Style::default().fg(marker_color(item.action))),
        Span::styled(
            item.actor.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", item.action.message())),
        Span::styled(
            format!("  {}", format_relative(elapsed)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn render_to_buffer(width: u16, height: u16, log: &ActivityLog, now: Instant) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_feed(f, f.area(), log, now);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn empty_log_shows_a_hint() {
        let log = ActivityLog::default();
        let buf = render_to_buffer(44, 8, &log, Instant::now());
        assert!(row_text(&buf, 1).contains("No activity yet"));
    }

    #[test]
    fn rows_are_newest_first_with_relative_times() {
        let t0 = Instant::now();
        let mut log = ActivityLog::default();
        log.push(Action::Feed, "You", t0);
        log.push(Action::Pet, "Patricia", t0 + Duration::from_secs(10));

        let buf = render_to_buffer(44, 8, &log, t0 + Duration::from_secs(10));
        let first = row_text(&buf, 1);
        let second = row_text(&buf, 2);
        assert!(first.contains("Patricia pet the dog"));
        assert!(first.contains("just now"));
        assert!(second.contains("You fed the dog"));
        assert!(second.contains("10s ago"));
    }

    #[test]
    fn rows_clip_to_the_panel_height() {
        let t0 = Instant::now();
        let mut log = ActivityLog::default();
        for _ in 0..20 {
            log.push(Action::Walk, "You", t0);
        }
        // Inner height is 4; the draw call must not overflow the area.
        let buf = render_to_buffer(44, 6, &log, t0);
        assert!(row_text(&buf, 1).contains("walked the dog"));
        assert!(row_text(&buf, 4).contains("walked the dog"));
    }
}
