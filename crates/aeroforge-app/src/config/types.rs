//! Configuration types for Aeroforge
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-sections with per-field serde defaults

use aeroforge_core::ButtonSize;
use serde::{Deserialize, Serialize};

/// Application settings (`~/.config/aeroforge/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub defaults: DefaultsSettings,
}

/// UI-related settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Syntect theme name for the generated CSS view
    #[serde(default = "default_syntax_theme")]
    pub syntax_theme: String,

    /// Whether to syntax-highlight the generated CSS at all
    #[serde(default = "default_highlight")]
    pub highlight: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            syntax_theme: default_syntax_theme(),
            highlight: default_highlight(),
        }
    }
}

fn default_syntax_theme() -> String {
    "base16-ocean.dark".to_string()
}

fn default_highlight() -> bool {
    true
}

/// Initial parameter values applied at startup.
///
/// These seed the session only; values adjusted at runtime are never
/// written back.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsSettings {
    /// Initial button text
    #[serde(default = "default_text")]
    pub text: String,

    /// Initial size category
    #[serde(default)]
    pub size: ButtonSize,

    /// Initial hue: a preset name ("green") or custom degrees ("217")
    #[serde(default = "default_hue")]
    pub hue: String,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            text: default_text(),
            size: ButtonSize::default(),
            hue: default_hue(),
        }
    }
}

fn default_text() -> String {
    "Accept".to_string()
}

fn default_hue() -> String {
    "green".to_string()
}
