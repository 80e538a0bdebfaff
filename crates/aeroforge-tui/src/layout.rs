//! Screen layout definitions for the TUI
//!
//! The screen splits into a header bar, a left column with the controls
//! and the live preview, a right column with the generated output, and a
//! one-row status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum width of the controls column.
const CONTROLS_WIDTH: u16 = 40;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + keybindings)
    pub header: Rect,

    /// Parameter controls (left column, top)
    pub controls: Rect,

    /// Button preview (left column, bottom)
    pub preview: Rect,

    /// Generated stylesheet and markup (right column)
    pub output: Rect,

    /// Status bar (bottom row)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(CONTROLS_WIDTH), // Controls + preview
        Constraint::Min(30),                // Output
    ])
    .split(rows[1]);

    let left = Layout::vertical([
        Constraint::Min(6),    // Controls
        Constraint::Length(7), // Preview
    ])
    .split(columns[0]);

    ScreenAreas {
        header: rows[0],
        controls: left[0],
        preview: left[1],
        output: columns[1],
        status: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rows() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 29);
        // Main content fills the space between header and status bar
        assert_eq!(layout.controls.y, 3);
    }

    #[test]
    fn test_layout_columns() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area);

        assert_eq!(layout.controls.width, CONTROLS_WIDTH);
        assert_eq!(layout.output.x, CONTROLS_WIDTH);
        assert_eq!(layout.output.width, 100 - CONTROLS_WIDTH);
    }

    #[test]
    fn test_preview_below_controls() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area);

        assert_eq!(layout.preview.height, 7);
        assert_eq!(layout.preview.y, layout.controls.y + layout.controls.height);
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let area = Rect::new(0, 0, 10, 4);
        let _ = create(area);
    }
}
