//! Status bar widget
//!
//! Shows transient copy/error flashes, falling back to context-sensitive
//! key hints for the focused control.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use aeroforge_app::state::{AppState, Control};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Key hints for the focused control.
    fn hints(&self) -> &'static str {
        match self.state.focus {
            Control::Text => "type to edit  Ctrl+U: clear  Tab: next",
            Control::Size => "←/→: cycle size  c: copy CSS  h: copy HTML",
            Control::HueSelect => "←/→: cycle color  Enter: custom hue",
            Control::CustomHue => "←/→: ±1°  [/]: ±10°  Enter: presets",
            Control::Saturation => "←/→: adjust saturation",
            Control::Glow => "←/→: adjust glow",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = match &self.state.status_flash {
            Some(flash) => {
                let style = if flash.is_error {
                    styles::status_error()
                } else {
                    styles::status_ok()
                };
                Line::from(Span::styled(format!(" {}", flash.text), style))
            }
            None => Line::from(Span::styled(
                format!(" {}", self.hints()),
                styles::text_muted(),
            )),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
