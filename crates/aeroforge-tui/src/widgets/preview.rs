//! Live button preview
//!
//! Approximates the generated button in terminal cells: true-color
//! background and text from the derived OKLCH expressions, with the
//! bottom row blended toward white by the glow intensity.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

use aeroforge_app::state::AppState;
use aeroforge_core::{mix_rgb, oklch_to_rgb, ButtonSize};

use crate::theme::styles;

/// Lightness values of the derived color expressions.
const BACKGROUND_L: f64 = 0.75;
const FOREGROUND_L: f64 = 0.15;

pub struct ButtonPreview<'a> {
    state: &'a AppState,
}

impl<'a> ButtonPreview<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ButtonPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Preview ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 8 {
            return;
        }

        // Light checker backdrop so the translucent-looking button reads
        // against something, like a transparency grid.
        for row in 0..inner.height {
            for col in 0..inner.width {
                let light = (row + col / 2) % 2 == 0;
                let shade = if light { 60 } else { 48 };
                buf[(inner.x + col, inner.y + row)].set_bg(Color::Rgb(shade, shade, shade));
            }
        }

        let params = &self.state.params;
        let hue = f64::from(params.hue.resolve());
        let sat = params.saturation.value();
        let background = oklch_to_rgb(BACKGROUND_L, sat, hue);
        let foreground = oklch_to_rgb(FOREGROUND_L, sat / 2.0, hue);
        let glow = mix_rgb(background, (255, 255, 255), params.glow.value());

        // Button footprint scales with the size category.
        let (pad_x, height) = match params.size {
            ButtonSize::Small => (2u16, 3u16),
            ButtonSize::Medium => (3, 3),
            ButtonSize::Large => (4, 5),
        };
        let height = height.min(inner.height);
        let label_width = params.text.chars().count() as u16;
        let width = (label_width + 2 * pad_x + 2).min(inner.width);

        let x = inner.x + (inner.width - width) / 2;
        let y = inner.y + (inner.height - height) / 2;
        let bg_color = Color::Rgb(background.0, background.1, background.2);

        for row in 0..height {
            for col in 0..width {
                let cell = &mut buf[(x + col, y + row)];
                cell.set_symbol(" ");
                // Bottom row carries the glow gradient.
                if row == height - 1 {
                    cell.set_bg(Color::Rgb(glow.0, glow.1, glow.2));
                } else {
                    cell.set_bg(bg_color);
                }
            }
        }

        // Centered label in the derived foreground color.
        let text_y = y + (height - 1) / 2;
        let text_x = x + (width.saturating_sub(label_width)) / 2;
        let label_style = Style::default()
            .fg(Color::Rgb(foreground.0, foreground.1, foreground.2))
            .bg(bg_color)
            .add_modifier(Modifier::BOLD);
        buf.set_span(text_x, text_y, &Span::styled(params.text.clone(), label_style), width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &AppState) -> Buffer {
        let area = Rect::new(0, 0, 38, 7);
        let mut buf = Buffer::empty(area);
        ButtonPreview::new(state).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_preview_contains_button_text() {
        let state = AppState::new();
        let buf = render(&state);
        let row: String = (0..38).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert!(row.contains("Accept"));
    }

    #[test]
    fn test_preview_uses_true_color_background() {
        let state = AppState::new();
        let buf = render(&state);
        let mut found_rgb = false;
        for y in 0..7 {
            for x in 0..38 {
                if matches!(buf[(x, y)].bg, Color::Rgb(..)) {
                    found_rgb = true;
                }
            }
        }
        assert!(found_rgb);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let state = AppState::new();
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        ButtonPreview::new(&state).render(area, &mut buf);
    }
}
