use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use biscuit_sim::Mood;
use biscuit_sprite::Canvas;

use crate::pixels::blit_rgba;

fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Idle => Color::White,
        Mood::Happy => Color::Magenta,
        Mood::Eating => Color::Yellow,
        Mood::Sleeping => Color::Blue,
        Mood::Walking => Color::Green,
    }
}

/// Render the room panel: the pixel canvas with a mood badge underneath,
/// framed by a block carrying the pet's name.
pub fn render_room(f: &mut Frame, area: Rect, canvas: &Canvas, pet_name: &str, mood: Mood) {
    let title = format!(" {} ", pet_name.to_uppercase());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    blit_rgba(
        f.buffer_mut(),
        rows[0],
        canvas.data(),
        canvas.width(),
        canvas.height(),
    );

    let badge = Paragraph::new(Line::from(Span::styled(
        mood.label(),
        Style::default()
            .fg(mood_color(mood))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(badge, rows[1]);
}
