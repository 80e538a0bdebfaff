//! Parameter controls panel
//!
//! Renders the five adjustable controls as label/value pairs, with the
//! focused control highlighted and slider values drawn as bars.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use aeroforge_app::state::{AppState, Control};
use aeroforge_core::{ButtonSize, HueSelection};

use crate::theme::styles;

/// Width of a slider bar in cells.
const SLIDER_WIDTH: usize = 20;

/// The left-hand panel with all parameter controls
pub struct ControlsPanel<'a> {
    state: &'a AppState,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn label_line(&self, control: Control) -> Line<'static> {
        let focused = self.state.focus == control;
        let marker = if focused { "▸ " } else { "  " };
        Line::from(vec![
            Span::styled(marker.to_string(), styles::accent()),
            Span::styled(
                control.label().to_string(),
                if focused {
                    styles::control_focused()
                } else {
                    styles::control_unfocused()
                },
            ),
        ])
    }

    fn text_line(&self) -> Line<'static> {
        let focused = self.state.focus == Control::Text;
        // Leave room for the focus marker and the cursor cell.
        let visible = truncate_to_width(&self.state.params.text, SLIDER_WIDTH + 10);
        let mut spans = vec![
            Span::raw("    "),
            Span::styled(visible.to_string(), styles::text_primary()),
        ];
        if focused {
            spans.push(Span::styled("█".to_string(), styles::accent()));
        }
        Line::from(spans)
    }

    fn size_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw("    ")];
        for (i, size) in ButtonSize::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            if *size == self.state.params.size {
                spans.push(Span::styled(format!("[{}]", size.label()), styles::accent_bold()));
            } else {
                spans.push(Span::styled(format!(" {} ", size.label()), styles::text_muted()));
            }
        }
        Line::from(spans)
    }

    fn hue_line(&self) -> Line<'static> {
        match self.state.params.hue {
            HueSelection::Preset(preset) => Line::from(vec![
                Span::raw("    "),
                Span::styled("◂ ".to_string(), styles::text_muted()),
                Span::styled(
                    format!("{:<8}", preset.label()),
                    styles::text_primary(),
                ),
                Span::styled(" ▸".to_string(), styles::text_muted()),
                Span::styled(format!("  {}°", preset.degrees()), styles::text_secondary()),
            ]),
            HueSelection::Custom(_) => Line::from(vec![
                Span::raw("    "),
                Span::styled("Custom".to_string(), styles::text_primary()),
                Span::styled("  (Enter: presets)".to_string(), styles::text_muted()),
            ]),
        }
    }

    fn custom_hue_line(&self) -> Option<Line<'static>> {
        match self.state.params.hue {
            HueSelection::Custom(hue) => {
                Some(slider_line(f64::from(hue) / 359.0, &format!("{hue}°")))
            }
            HueSelection::Preset(_) => None,
        }
    }
}

/// Render a slider as a partially filled bar with its value after it.
fn slider_line(ratio: f64, value: &str) -> Line<'static> {
    let filled = ((ratio.clamp(0.0, 1.0)) * SLIDER_WIDTH as f64).round() as usize;
    Line::from(vec![
        Span::raw("    "),
        Span::styled("━".repeat(filled), styles::accent()),
        Span::styled("─".repeat(SLIDER_WIDTH - filled), styles::text_muted()),
        Span::styled(format!(" {value}"), styles::text_secondary()),
    ])
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Parameters ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        lines.push(self.label_line(Control::Text));
        lines.push(self.text_line());
        lines.push(Line::default());

        lines.push(self.label_line(Control::Size));
        lines.push(self.size_line());
        lines.push(Line::default());

        lines.push(self.label_line(Control::HueSelect));
        lines.push(self.hue_line());
        if let Some(custom) = self.custom_hue_line() {
            lines.push(self.label_line(Control::CustomHue));
            lines.push(custom);
        }
        lines.push(Line::default());

        lines.push(self.label_line(Control::Saturation));
        lines.push(slider_line(
            self.state.params.saturation.ratio(),
            &self.state.params.saturation.css(),
        ));
        lines.push(Line::default());

        lines.push(self.label_line(Control::Glow));
        lines.push(slider_line(
            self.state.params.glow.ratio(),
            &self.state.params.glow.css(),
        ));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Truncate a value to a display width, for narrow terminals.
fn truncate_to_width(value: &str, max: usize) -> &str {
    let mut end = value.len();
    while value[..end].width() > max {
        end = value[..end]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }
    &value[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroforge_core::HuePreset;

    fn buffer_text(state: &AppState) -> String {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        ControlsPanel::new(state).render(area, &mut buf);
        let mut out = String::new();
        for y in 0..20 {
            for x in 0..40 {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_all_control_labels() {
        let state = AppState::new();
        let text = buffer_text(&state);
        for control in [
            Control::Text,
            Control::Size,
            Control::HueSelect,
            Control::Saturation,
            Control::Glow,
        ] {
            assert!(text.contains(control.label()), "missing {control:?}");
        }
    }

    #[test]
    fn test_selected_size_is_bracketed() {
        let state = AppState::new();
        let text = buffer_text(&state);
        assert!(text.contains("[Large]"));
    }

    #[test]
    fn test_custom_hue_slider_appears_in_custom_mode() {
        let mut state = AppState::new();
        let text = buffer_text(&state);
        assert!(!text.contains(Control::CustomHue.label()));

        state.params.hue = HueSelection::Custom(HuePreset::Green.degrees());
        let text = buffer_text(&state);
        assert!(text.contains(Control::CustomHue.label()));
        assert!(text.contains("140°"));
    }

    #[test]
    fn test_slider_shows_decimal_value() {
        let state = AppState::new();
        let text = buffer_text(&state);
        assert!(text.contains("0.2"));
        assert!(text.contains("0.7"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }
}
