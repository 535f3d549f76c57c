//! Configuration for the Biscuit dashboard.
//!
//! Owns the on-disk `biscuit.toml` schema so the runtime crates share a
//! single source of truth for names, rosters, and seeding.

pub mod app;

pub use app::{config_path, load, AppConfig, CONFIG_ENV};
