//! Core infrastructure for the Biscuit dashboard.
//!
//! This crate provides the building blocks shared by the application shell:
//! an event bus, drop-down console, command system, logging subsystem, tick
//! metering, and session state.

pub mod bus;
pub mod command;
pub mod console;
pub mod event;
pub mod logging;
pub mod meter;
pub mod session;
