//! # aeroforge-tui - Terminal UI
//!
//! Ratatui-based terminal interface for Aeroforge. Drives the TEA loop
//! from aeroforge-app and adds terminal rendering, event polling, and
//! the widget set (controls, preview, output panes, status bar).

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod signals;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
