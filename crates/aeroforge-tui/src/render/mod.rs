//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use aeroforge_app::state::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function; it never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(), areas.header);
    frame.render_widget(widgets::ControlsPanel::new(state), areas.controls);
    frame.render_widget(widgets::ButtonPreview::new(state), areas.preview);
    frame.render_widget(widgets::OutputView::new(state), areas.output);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_view_renders_without_panic() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let state = AppState::new();
        terminal.draw(|frame| view(frame, &state)).expect("draw");
    }

    #[test]
    fn test_view_tiny_terminal() {
        let backend = TestBackend::new(12, 5);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let state = AppState::new();
        terminal.draw(|frame| view(frame, &state)).expect("draw");
    }
}
