//! Unified Refactory player crate.
//!
//! This crate contains the Dioxus UI, the shared game state, and the
//! platform adapters. Multi-platform support is provided via compile-time
//! `cfg` selection.

pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use state::Platform;
pub use ui::{app, use_platform};
