//! Color palette for the Aero-Glass theme.
//!
//! Named terminal colors so the UI respects the user's terminal scheme;
//! only the button preview uses true-color values, computed from the
//! current parameters.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;

// --- Sliders ---
pub const SLIDER_FILLED: Color = Color::Cyan;
pub const SLIDER_EMPTY: Color = Color::DarkGray;
