use std::time::{Duration, Instant};

pub struct SessionState {
    pub started_at: Instant,
    pub status_line: String,
}

impl SessionState {
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            status_line: "A quiet day at the office.".to_string(),
        }
    }

    pub fn uptime(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}
