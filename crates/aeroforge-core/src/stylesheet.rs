//! Stylesheet and markup rendering.
//!
//! String-interpolates the derived color expressions into the fixed
//! Frutiger Aero template. The template always carries all three size
//! variant blocks; the markup snippet picks the selected one.

use std::fmt::Write;

use crate::params::{ButtonParams, ButtonSize};
use crate::style::DerivedStyle;

/// Render the full stylesheet for the given parameters.
pub fn render_stylesheet(params: &ButtonParams) -> String {
    let colors = DerivedStyle::from_params(params);

    let mut css = format!(
        r#"/* Authentic Frutiger Aero Button CSS */
.frutiger-aero-button {{
  /* OKLCH Color System for accurate colors */
  --hue: {hue};
  --sat: {sat};
  --glow-intensity: {glow};

  /* Color Variables */
  --fg: {foreground};
  --bg: {background};
  --bg-dark: {background_dark};
  --bottom-glow: {bottom_glow};

  /* Base Styling */
  background-color: var(--bg);
  background:
    var(--bottom-glow),
    linear-gradient(to bottom, var(--bg-dark), var(--bg));

  border: 1px solid var(--bg);
  border-radius: 9999px;

  /* Shadows and Effects */
  box-shadow: 0 4px 4px rgba(0, 0, 0, 0.4);

  /* Typography */
  color: var(--fg);
  font-family: "Lucida Grande", "Lucida Sans Unicode", "Segoe UI", system-ui, sans-serif;
  font-weight: 700;
  text-shadow: 0 2px 0.5em rgba(0, 0, 0, 0.2);

  /* Layout */
  cursor: pointer;
  position: relative;
  transition: all 300ms ease;

  /* Prevent text selection */
  user-select: none;
  -webkit-user-select: none;
}}

/* Top Highlight Effect */
.frutiger-aero-button::after {{
  content: "";
  position: absolute;
  top: 4%;
  left: 0.75em;
  width: calc(100% - 1.5em);
  height: 40%;
  background: linear-gradient(
    to bottom,
    rgba(255, 255, 255, 0.8),
    rgba(255, 255, 255, 0.1)
  );
  border-radius: inherit;
  transition: background 400ms ease;
  pointer-events: none;
}}

/* Hover State */
.frutiger-aero-button:hover,
.frutiger-aero-button:focus {{
  box-shadow: 0 6px 8px rgba(0, 0, 0, 0.4);
  transform: translateY(-1px);
}}

/* Active State */
.frutiger-aero-button:active {{
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.4);
  transform: translateY(1px);
}}

/* Size Variations */"#,
        hue = colors.hue,
        sat = colors.sat,
        glow = colors.glow,
        foreground = colors.foreground,
        background = colors.background,
        background_dark = colors.background_dark,
        bottom_glow = colors.bottom_glow,
    );

    for size in ButtonSize::ALL {
        // Writing to a String cannot fail.
        let _ = write!(
            css,
            "\n.frutiger-aero-button.{class} {{\n  padding: {padding};\n  font-size: {font_size};\n}}\n",
            class = size.class_name(),
            padding = size.padding(),
            font_size = size.font_size(),
        );
    }

    css
}

/// Render the markup snippet embedding the current text and size class.
///
/// The text is embedded literally; no HTML escaping is applied.
pub fn render_markup(text: &str, size: ButtonSize) -> String {
    format!(
        "<button class=\"frutiger-aero-button {}\">{}</button>",
        size.class_name(),
        text
    )
}

/// Both generated outputs, bundled for eager recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedOutput {
    /// The full stylesheet text.
    pub css: String,
    /// The `<button>` markup snippet.
    pub markup: String,
}

impl GeneratedOutput {
    pub fn from_params(params: &ButtonParams) -> Self {
        Self {
            css: render_stylesheet(params),
            markup: render_markup(&params.text, params.size),
        }
    }
}
