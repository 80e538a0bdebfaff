//! Semantic style builders for the Aero-Glass theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Control styles ---
/// Label of the focused control.
pub fn control_focused() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Label of an unfocused control.
pub fn control_unfocused() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

// --- Status styles ---
pub fn status_ok() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Containers ---
/// Bordered container with rounded corners, highlighted when focused.
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_focused_control_uses_accent() {
        let style = control_focused();
        assert_eq!(style.fg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_glass_block_construction() {
        let _focused = glass_block(true);
        let _unfocused = glass_block(false);
    }
}
