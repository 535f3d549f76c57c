use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for the dashboard: a one-row top bar over a three-panel
/// bento with the stats gauges left, the room centre, and the activity feed
/// right.
#[derive(Debug, Clone, Copy)]
pub struct DashRects {
    pub top: Rect,
    pub stats: Rect,
    pub room: Rect,
    pub feed: Rect,
}

/// Terminals narrower than this stack the panels vertically instead.
const MIN_WIDE_COLS: u16 = 72;

pub fn dashboard_layout(area: Rect) -> DashRects {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);
    let body = chunks[1];

    if area.width < MIN_WIDE_COLS {
        let rows = Layout::vertical([
            Constraint::Length(7),
            Constraint::Min(1),
            Constraint::Length(8),
        ])
        .split(body);
        return DashRects {
            top: chunks[0],
            stats: rows[0],
            room: rows[1],
            feed: rows[2],
        };
    }

    let cols = Layout::horizontal([
        Constraint::Length(26),
        Constraint::Min(40),
        Constraint::Length(32),
    ])
    .split(body);

    DashRects {
        top: chunks[0],
        stats: cols[0],
        room: cols[1],
        feed: cols[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_gets_three_columns() {
        let rects = dashboard_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(rects.top.height, 1);
        assert_eq!(rects.stats.y, rects.room.y);
        assert!(rects.stats.x < rects.room.x);
        assert!(rects.room.x < rects.feed.x);
        assert!(rects.room.width > rects.stats.width);
    }

    #[test]
    fn narrow_terminal_stacks_the_panels() {
        let rects = dashboard_layout(Rect::new(0, 0, 50, 40));
        assert_eq!(rects.stats.x, rects.room.x);
        assert!(rects.stats.y < rects.room.y);
        assert!(rects.room.y < rects.feed.y);
    }
}
