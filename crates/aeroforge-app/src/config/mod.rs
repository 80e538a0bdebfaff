//! Configuration file parsing for Aeroforge
//!
//! Supports `~/.config/aeroforge/config.toml` with `[ui]` and `[defaults]`
//! sections. Runtime parameter changes are never written back.

pub mod settings;
pub mod types;

pub use settings::{config_dir, load_settings, load_settings_from};
pub use types::*;
