use std::time::Instant;

use biscuit_sim::Action;

/// Everything that flows through the [`EventBus`](crate::bus::EventBus).
#[derive(Debug, Clone)]
pub enum Event {
    /// Periodic heartbeat carrying the loop's current instant.
    Tick { now: Instant },
    /// Raw key input not already consumed by the console.
    Key(crossterm::event::KeyEvent),
    /// Terminal was resized.
    Resize { cols: u16, rows: u16 },
    /// A care action requested from the keyboard or the console.
    Care(Action),
    /// Orderly shutdown.
    Quit,
}
