//! Generated output pane
//!
//! Shows the generated stylesheet (highlighted when the background task
//! has delivered spans, raw otherwise) and the markup snippet below it.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use aeroforge_app::highlight::HighlightedLine;
use aeroforge_app::state::AppState;

use crate::theme::styles;

pub struct OutputView<'a> {
    state: &'a AppState,
}

impl<'a> OutputView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn stylesheet_lines(&self) -> Vec<Line<'static>> {
        match &self.state.view.highlighted {
            Some(lines) => lines.iter().map(highlighted_to_line).collect(),
            None => self
                .state
                .output
                .css
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), styles::text_primary())))
                .collect(),
        }
    }
}

/// Convert one highlighted line into a ratatui line.
fn highlighted_to_line(line: &HighlightedLine) -> Line<'static> {
    let spans = line
        .spans
        .iter()
        .map(|span| {
            let mut style = Style::default();
            if let Some((r, g, b)) = span.fg {
                style = style.fg(Color::Rgb(r, g, b));
            }
            if span.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if span.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            Span::styled(span.text.clone(), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

impl Widget for OutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Min(5),    // Stylesheet
            Constraint::Length(3), // Markup
        ])
        .split(area);

        let css_block = styles::glass_block(false)
            .title(Span::styled(" CSS ", styles::text_secondary()));
        let css_inner = css_block.inner(rows[0]);
        css_block.render(rows[0], buf);

        if css_inner.height > 0 && css_inner.width > 0 {
            let lines = self.stylesheet_lines();
            // Clamp the scroll so the last line stays visible.
            let max_scroll = (lines.len() as u16).saturating_sub(css_inner.height);
            let scroll = self.state.view.scroll.min(max_scroll);
            Paragraph::new(lines)
                .scroll((scroll, 0))
                .render(css_inner, buf);
        }

        let markup_block = styles::glass_block(false)
            .title(Span::styled(" HTML ", styles::text_secondary()));
        let markup_inner = markup_block.inner(rows[1]);
        markup_block.render(rows[1], buf);

        if markup_inner.height > 0 && markup_inner.width > 0 {
            Paragraph::new(Line::from(Span::styled(
                self.state.output.markup.clone(),
                styles::text_primary(),
            )))
            .render(markup_inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroforge_app::highlight::HighlightSpan;

    fn buffer_text(state: &AppState) -> String {
        let area = Rect::new(0, 0, 70, 30);
        let mut buf = Buffer::empty(area);
        OutputView::new(state).render(area, &mut buf);
        let mut out = String::new();
        for y in 0..30 {
            for x in 0..70 {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_raw_fallback_shows_stylesheet() {
        let state = AppState::new();
        let text = buffer_text(&state);
        assert!(text.contains(".frutiger-aero-button {"));
        assert!(text.contains("--hue: 140;"));
    }

    #[test]
    fn test_markup_pane_shows_snippet() {
        let state = AppState::new();
        let text = buffer_text(&state);
        assert!(text.contains("<button class="));
    }

    #[test]
    fn test_highlighted_spans_render_with_color() {
        let mut state = AppState::new();
        state.view.highlighted = Some(vec![HighlightedLine {
            spans: vec![HighlightSpan {
                text: ".highlighted-marker".to_string(),
                fg: Some((255, 0, 0)),
                bold: false,
                italic: false,
            }],
        }]);
        let text = buffer_text(&state);
        assert!(text.contains(".highlighted-marker"));

        let area = Rect::new(0, 0, 70, 30);
        let mut buf = Buffer::empty(area);
        OutputView::new(&state).render(area, &mut buf);
        // First content cell carries the span color.
        assert_eq!(buf[(1, 1)].fg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = AppState::new();
        state.view.scroll = u16::MAX;
        // Must not panic with an absurd scroll offset.
        let _ = buffer_text(&state);
    }
}
