use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::logging::LogEntry;

/// How long the console takes to slide fully open or shut.
pub const SLIDE_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
enum Slide {
    Closed,
    Opening { since: Instant },
    Open,
    Closing { since: Instant },
}

/// Drop-down log console with a quake-style slide animation.
///
/// Holds the log ring, the input line, and the slide state. Animation is
/// driven by the instants the caller passes in; reversing mid-slide keeps
/// the overlay height continuous.
pub struct Console {
    slide: Slide,
    log_lines: VecDeque<LogEntry>,
    pub input_buffer: String,
    pub cursor_pos: usize,
    scroll_offset: usize,
    max_lines: usize,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Console {
    pub fn new(max_lines: usize) -> Self {
        Self {
            slide: Slide::Closed,
            log_lines: VecDeque::with_capacity(max_lines),
            input_buffer: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            max_lines,
        }
    }

    /// Start sliding toward the opposite state.
    pub fn toggle(&mut self, now: Instant) {
        let f = self.overlay_fraction(now);
        self.slide = match self.slide {
            Slide::Closed | Slide::Closing { .. } => Slide::Opening {
                since: now - SLIDE_DURATION.mul_f64(f),
            },
            Slide::Open | Slide::Opening { .. } => Slide::Closing {
                since: now - SLIDE_DURATION.mul_f64(1.0 - f),
            },
        };
    }

    /// Settle a finished slide into its steady state.
    pub fn update(&mut self, now: Instant) {
        match self.slide {
            Slide::Opening { since }
                if now.saturating_duration_since(since) >= SLIDE_DURATION =>
            {
                self.slide = Slide::Open;
            }
            Slide::Closing { since }
                if now.saturating_duration_since(since) >= SLIDE_DURATION =>
            {
                self.slide = Slide::Closed;
            }
            _ => {}
        }
    }

    /// Fraction of the overlay height currently shown, `0.0..=1.0`.
    pub fn overlay_fraction(&self, now: Instant) -> f64 {
        let progress = |since: Instant| {
            (now.saturating_duration_since(since).as_secs_f64()
                / SLIDE_DURATION.as_secs_f64())
            .min(1.0)
        };
        match self.slide {
            Slide::Closed => 0.0,
            Slide::Open => 1.0,
            Slide::Opening { since } => progress(since),
            Slide::Closing { since } => 1.0 - progress(since),
        }
    }

    /// Fully open and accepting input.
    pub fn is_open(&self) -> bool {
        matches!(self.slide, Slide::Open)
    }

    /// Any part of the overlay is on screen (open or mid-slide).
    pub fn is_visible(&self) -> bool {
        !matches!(self.slide, Slide::Closed)
    }

    pub fn push_log(&mut self, entry: LogEntry) {
        if self.log_lines.len() >= self.max_lines {
            self.log_lines.pop_front();
            // Keep the same lines in view when scrolled up.
            if self.scroll_offset > 0 {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
        }
        self.log_lines.push_back(entry);
    }

    pub fn log_lines(&self) -> &VecDeque<LogEntry> {
        &self.log_lines
    }

    pub fn clear_logs(&mut self) {
        self.log_lines.clear();
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let max_offset = self.log_lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max_offset);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn insert_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.input_buffer[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input_buffer.remove(prev);
            self.cursor_pos = prev;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.input_buffer[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input_buffer.len() {
            self.cursor_pos = self.input_buffer[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.input_buffer.len());
        }
    }

    /// Submit the current input buffer. Returns the input and clears the buffer.
    pub fn submit_input(&mut self) -> String {
        let input = self.input_buffer.clone();
        self.input_buffer.clear();
        self.cursor_pos = 0;
        input
    }
}
