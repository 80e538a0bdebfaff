//! Derived color expressions.
//!
//! Pure mapping from the slider values to the four CSS expressions the
//! stylesheet template interpolates. Lightness levels are fixed: 75% for the
//! background, 45% for the dark background, 15% for the foreground (with the
//! chroma halved). OKLCH stays a string format here; only the terminal
//! preview converts it numerically (see [`crate::color`]).

use crate::params::{ButtonParams, Glow, Saturation};

/// The four formatted expressions derived from hue, saturation, and glow.
///
/// Deterministic and side-effect free; recomputed eagerly on every
/// parameter change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStyle {
    /// Resolved hue angle in `[0, 360)`.
    pub hue: u16,
    /// Saturation as interpolated into `--sat`.
    pub sat: String,
    /// Glow alpha as interpolated into `--glow-intensity`.
    pub glow: String,
    /// `oklch(75% <sat> <hue> / 0.8)`
    pub background: String,
    /// `oklch(45% <sat> <hue> / 0.75)`
    pub background_dark: String,
    /// `oklch(15% <sat/2> <hue>)`
    pub foreground: String,
    /// Radial white gradient whose alpha is the glow intensity.
    pub bottom_glow: String,
}

impl DerivedStyle {
    /// Derive the color expressions from pre-clamped slider values.
    pub fn derive(hue: u16, saturation: Saturation, glow: Glow) -> Self {
        let hue = hue % 360;
        let sat = saturation.css();
        Self {
            hue,
            background: format!("oklch(75% {sat} {hue} / 0.8)"),
            background_dark: format!("oklch(45% {sat} {hue} / 0.75)"),
            foreground: format!("oklch(15% {} {hue})", saturation.halved_css()),
            bottom_glow: format!(
                "radial-gradient(farthest-corner at bottom center, \
                 rgba(255, 255, 255, {glow}), transparent)",
                glow = glow.css()
            ),
            sat,
            glow: glow.css(),
        }
    }

    /// Derive from a full parameter set, resolving the hue selection.
    pub fn from_params(params: &ButtonParams) -> Self {
        Self::derive(params.hue.resolve(), params.saturation, params.glow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{HuePreset, HueSelection};

    #[test]
    fn test_derive_fixed_lightness_levels() {
        let style = DerivedStyle::derive(140, Saturation::default(), Glow::default());
        assert!(style.background.starts_with("oklch(75% "));
        assert!(style.background_dark.starts_with("oklch(45% "));
        assert!(style.foreground.starts_with("oklch(15% "));
    }

    #[test]
    fn test_derive_scenario_values() {
        // hue=green(140), sat=0.2, glow=0.7
        let style = DerivedStyle::derive(140, Saturation::default(), Glow::default());
        assert_eq!(style.background, "oklch(75% 0.2 140 / 0.8)");
        assert_eq!(style.background_dark, "oklch(45% 0.2 140 / 0.75)");
        assert_eq!(style.foreground, "oklch(15% 0.1 140)");
        assert!(style.bottom_glow.contains("rgba(255, 255, 255, 0.7)"));
        assert!(style.bottom_glow.contains("farthest-corner at bottom center"));
    }

    #[test]
    fn test_derive_hue_appears_in_every_color() {
        for preset in HuePreset::ALL {
            let hue = preset.degrees();
            let style = DerivedStyle::derive(hue, Saturation::default(), Glow::default());
            let hue_str = format!(" {hue}");
            assert!(style.background.contains(&hue_str));
            assert!(style.background_dark.contains(&hue_str));
            assert!(style.foreground.ends_with(&format!(" {hue})")));
        }
    }

    #[test]
    fn test_derive_wraps_out_of_range_hue() {
        let style = DerivedStyle::derive(360, Saturation::default(), Glow::default());
        assert_eq!(style.hue, 0);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let params = ButtonParams {
            hue: HueSelection::Custom(17),
            ..Default::default()
        };
        assert_eq!(
            DerivedStyle::from_params(&params),
            DerivedStyle::from_params(&params)
        );
    }
}
