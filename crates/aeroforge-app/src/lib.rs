//! # aeroforge-app - Application Logic
//!
//! TEA-style application layer for Aeroforge. Owns the state machine,
//! message handling, configuration, and the clipboard/highlight services.
//! Contains no terminal rendering code, so it stays testable without a TTY.
//!
//! ## Architecture
//!
//! - [`state::AppState`] - The model: parameters, focus, generated output
//! - [`message::Message`] - Every event the application reacts to
//! - [`handler::update`] - The pure update function; side effects come back
//!   as [`handler::UpdateAction`]s for the runtime to execute
//! - [`highlight::Highlighter`] - Background stylesheet highlighting
//! - [`clipboard`] - System clipboard writes
//! - [`config`] - TOML settings with graceful fallback

pub mod clipboard;
pub mod config;
pub mod handler;
pub mod highlight;
pub mod input_key;
pub mod message;
pub mod state;

pub use config::{load_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use highlight::{HighlightSpan, HighlightedLine, Highlighter};
pub use input_key::InputKey;
pub use message::{CopyKind, Message};
pub use state::{AppPhase, AppState, Control};
