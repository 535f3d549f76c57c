//! Human-readable formatting helpers for the dashboard.
//!
//! All functions are pure and easy to test in isolation.

use std::time::Duration;

/// Format how long ago something happened, feed-row style.
///
/// Returns `"just now"` under five seconds, then `"42s ago"`, `"3m ago"`,
/// `"2h ago"` as the gap grows.
pub fn format_relative(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 5 {
        "just now".into()
    } else if secs < 60 {
        format!("{secs}s ago")
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

/// Format a duration in seconds as a human-readable uptime string.
///
/// Returns values like `"2h 15m 30s"`, `"3d 1h 45m"`, `"0s"`.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let mins = (secs % 3600) / 60;
    let s = secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {mins}m")
    } else if hours > 0 {
        format!("{hours}h {mins}m {s}s")
    } else if mins > 0 {
        format!("{mins}m {s}s")
    } else {
        format!("{s}s")
    }
}
