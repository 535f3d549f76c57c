use std::time::Instant;

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use biscuit_sim::PetSim;
use biscuit_sprite::Canvas;

use crate::feed::render_feed;
use crate::format::format_uptime;
use crate::layout::DashRects;
use crate::room::render_room;
use crate::stats::render_stats;

/// Top-level view data not derivable from the sim itself.
pub struct DashView<'a> {
    pub pet_name: &'a str,
    pub status_line: &'a str,
    pub uptime_secs: u64,
}

/// Render the full dashboard: top bar plus the three panels.
pub fn render_dashboard(
    f: &mut Frame,
    rects: DashRects,
    sim: &PetSim,
    canvas: &Canvas,
    view: DashView<'_>,
    now: Instant,
) {
    let top = Paragraph::new(Line::from(format!(
        "BISCUIT | {} | up {}",
        view.status_line,
        format_uptime(view.uptime_secs)
    )))
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(top, rects.top);

    render_stats(f, rects.stats, sim);
    render_room(f, rects.room, canvas, view.pet_name, sim.mood());
    render_feed(f, rects.feed, sim.activity(), now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::dashboard_layout;
    use biscuit_sim::Action;
    use biscuit_sprite::scene;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render_to_buffer(width: u16, height: u16, sim: &PetSim, now: Instant) -> Buffer {
        let mut canvas = Canvas::room();
        scene::render(&mut canvas, sim.mood(), 0);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let rects = dashboard_layout(f.area());
                let view = DashView {
                    pet_name: "Biscuit",
                    status_line: "A quiet day at the office.",
                    uptime_secs: 125,
                };
                render_dashboard(f, rects, sim, &canvas, view, now);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol().to_string()).collect()
    }

    #[test]
    fn dashboard_shows_every_panel() {
        let now = Instant::now();
        let mut sim = PetSim::with_default_roster(3, now);
        sim.apply(Action::Pet, now);

        let text = buffer_text(&render_to_buffer(100, 30, &sim, now));
        assert!(text.contains("BISCUIT | A quiet day at the office. | up 2m 5s"));
        assert!(text.contains("CARE"));
        assert!(text.contains("Hunger"));
        assert!(text.contains("ACTIVITY"));
        assert!(text.contains("You pet the dog"));
        assert!(text.contains("So Happy!"));
    }

    #[test]
    fn narrow_dashboard_still_renders() {
        let now = Instant::now();
        let sim = PetSim::with_default_roster(3, now);

        let text = buffer_text(&render_to_buffer(48, 40, &sim, now));
        assert!(text.contains("CARE"));
        assert!(text.contains("ACTIVITY"));
        assert!(text.contains("No activity yet"));
    }
}
