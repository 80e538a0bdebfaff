//! Header bar widget
//!
//! Shows the app title and the global keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the app title and keybinding hints
pub struct MainHeader;

impl MainHeader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MainHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(
                " Aeroforge ",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Frutiger Aero button generator", styles::text_secondary()),
        ];

        // Right-align the keybinding hints when there is room
        let hints = "Tab: focus  ←/→: adjust  c: copy CSS  h: copy HTML  q: quit ";
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let pad = (inner.width as usize).saturating_sub(used + hints.chars().count());
        if pad > 0 {
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(hints, styles::text_muted()));
        }

        let line = Line::from(spans);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        MainHeader::new().render(area, &mut buf);
        (0..width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_header_shows_title() {
        let content = render_to_string(100);
        assert!(content.contains("Aeroforge"));
        assert!(content.contains("quit"));
    }

    #[test]
    fn test_header_narrow_terminal_drops_hints() {
        let content = render_to_string(40);
        assert!(content.contains("Aeroforge"));
        assert!(!content.contains("quit"));
    }
}
