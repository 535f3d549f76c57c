//! TUI rendering layer for the Biscuit dashboard.
//!
//! Provides the bento layout, the three dashboard panels, the half-block
//! pixel blitter, and the console overlay. All rendering uses [`ratatui`];
//! this crate owns the visual presentation while the sim and core crates
//! own the state.

pub mod console;
pub mod feed;
pub mod format;
pub mod layout;
pub mod pixels;
pub mod room;
pub mod shell;
pub mod stats;
