//! Syntax highlighting for the generated stylesheet.
//!
//! Wraps syntect behind a toolkit-agnostic span representation so the TUI
//! crate decides how styled text is drawn. The highlighter is treated as an
//! opaque formatting service: it runs off the update loop, and a failure
//! simply leaves the raw text on screen.

use aeroforge_core::prelude::*;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Theme used when the configured one is unknown.
pub const FALLBACK_THEME: &str = "base16-ocean.dark";

/// One styled run of text within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    /// Foreground color; `None` keeps the terminal default.
    pub fg: Option<(u8, u8, u8)>,
    pub bold: bool,
    pub italic: bool,
}

/// A single highlighted line, without its trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedLine {
    pub spans: Vec<HighlightSpan>,
}

/// CSS highlighter built on syntect's bundled syntax and theme sets.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Highlight `source` as CSS with the named theme.
    pub fn highlight(&self, source: &str, theme_name: &str) -> Result<Vec<HighlightedLine>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token("css")
            .ok_or_else(|| Error::highlight("no CSS syntax definition available"))?;

        let theme = self
            .theme_set
            .themes
            .get(theme_name)
            .or_else(|| {
                if theme_name != FALLBACK_THEME {
                    warn!("Unknown syntax theme '{theme_name}', using '{FALLBACK_THEME}'");
                }
                self.theme_set.themes.get(FALLBACK_THEME)
            })
            .ok_or_else(|| Error::highlight(format!("theme '{theme_name}' not found")))?;

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();

        for line in LinesWithEndings::from(source) {
            let ranges = highlighter
                .highlight_line(line, &self.syntax_set)
                .map_err(|e| Error::highlight(e.to_string()))?;

            let spans = ranges
                .into_iter()
                .map(|(style, text)| HighlightSpan {
                    text: text.trim_end_matches('\n').to_string(),
                    fg: Some((
                        style.foreground.r,
                        style.foreground.g,
                        style.foreground.b,
                    )),
                    bold: style.font_style.contains(FontStyle::BOLD),
                    italic: style.font_style.contains(FontStyle::ITALIC),
                })
                .filter(|span| !span.text.is_empty())
                .collect();

            lines.push(HighlightedLine { spans });
        }

        Ok(lines)
    }

    /// Names of the bundled themes, for config validation and docs.
    pub fn theme_names(&self) -> Vec<&str> {
        self.theme_set.themes.keys().map(String::as_str).collect()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroforge_core::{render_stylesheet, ButtonParams};

    #[test]
    fn test_highlight_generated_css() {
        let highlighter = Highlighter::new();
        let css = render_stylesheet(&ButtonParams::default());
        let lines = highlighter.highlight(&css, FALLBACK_THEME).unwrap();

        // One highlighted line per source line.
        assert_eq!(lines.len(), css.lines().count());

        // Reassembling the span text reproduces the source exactly.
        let rebuilt: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.text.as_str()).collect())
            .collect();
        let source: Vec<&str> = css.lines().collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_highlight_unknown_theme_falls_back() {
        let highlighter = Highlighter::new();
        let lines = highlighter.highlight(".a { color: red; }", "no-such-theme");
        assert!(lines.is_ok());
    }

    #[test]
    fn test_highlight_spans_have_colors() {
        let highlighter = Highlighter::new();
        let lines = highlighter
            .highlight(".a { color: red; }", FALLBACK_THEME)
            .unwrap();
        assert!(lines[0].spans.iter().all(|s| s.fg.is_some()));
    }

    #[test]
    fn test_fallback_theme_is_bundled() {
        let highlighter = Highlighter::new();
        assert!(highlighter.theme_names().contains(&FALLBACK_THEME));
    }
}
