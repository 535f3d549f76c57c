//! Stats-panel rendering: the three care gauges plus action key hints.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

use biscuit_sim::{Action, Gauge, PetSim};

/// Clamp a gauge value (0-100) to a ratio (0.0-1.0) safe for
/// [`LineGauge::ratio`].
fn clamp_ratio(value: f32) -> f64 {
    (value as f64 / 100.0).clamp(0.0, 1.0)
}

/// Choose a gauge colour. These meters drain toward trouble, so low is bad.
fn level_color(pct: u8, normal: Color) -> Color {
    if pct < 20 {
        Color::Red
    } else if pct < 45 {
        Color::Yellow
    } else {
        normal
    }
}

/// Render the care panel into the given area.
pub fn render_stats(f: &mut Frame, area: Rect, sim: &PetSim) {
    let block = Block::default().borders(Borders::ALL).title("CARE");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(1), // hunger
        Constraint::Length(1), // happiness
        Constraint::Length(1), // energy
        Constraint::Length(1), // blank
        Constraint::Length(1), // key hints
        Constraint::Min(0),
    ])
    .split(inner);

    render_gauge(f, rows[0], "Hunger", sim.hunger(), Color::Green);
    render_gauge(f, rows[1], "Happiness", sim.happiness(), Color::Magenta);
    render_gauge(f, rows[2], "Energy", sim.energy(), Color::Cyan);
    render_hints(f, rows[4], sim.busy());
}

fn render_gauge(f: &mut Frame, area: Rect, name: &str, gauge: Gauge, normal: Color) {
    let pct = gauge.percent();
    let color = level_color(pct, normal);
    let label = format!("{:<10}{:>3}%", name, pct);

    let meter = LineGauge::default()
        .ratio(clamp_ratio(gauge.value()))
        .label(label)
        .filled_style(Style::default().fg(color))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    f.render_widget(meter, area);
}

/// While an action is in flight the key hints collapse to its busy label;
/// otherwise the three care keys are shown in their feed-marker colours.
fn render_hints(f: &mut Frame, area: Rect, busy: Option<Action>) {
    let line = match busy {
        Some(action) => Line::from(Span::styled(
            action.busy_label(),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(vec![
            Span::styled("[f]", Style::default().fg(Color::Green)),
            Span::raw("eed "),
            Span::styled("[p]", Style::default().fg(Color::Magenta)),
            Span::raw("et "),
            Span::styled("[w]", Style::default().fg(Color::Cyan)),
            Span::raw("alk"),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}
