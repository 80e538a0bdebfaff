//! Button parameters: the five user-adjustable values and their bounds.
//!
//! All numeric sliders are stored as integer hundredths so that stepping
//! never accumulates float error and the CSS output prints the exact decimal
//! the slider produced (`0.06`, never `0.060000000000000005`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Format a hundredths value as the shortest decimal (20 -> "0.2", 100 -> "1").
pub(crate) fn format_hundredths(hundredths: u16) -> String {
    format!("{}", hundredths as f64 / 100.0)
}

/// Wrap an arbitrary degree delta into `[0, 360)`.
pub fn wrap_hue(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}

// ─────────────────────────────────────────────────────────────────
// Button Size
// ─────────────────────────────────────────────────────────────────

/// Button size category. Each carries its CSS class and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// CSS class suffix used in the stylesheet and markup snippet.
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }

    /// Display label for the toggle group.
    pub fn label(self) -> &'static str {
        match self {
            ButtonSize::Small => "Small",
            ButtonSize::Medium => "Medium",
            ButtonSize::Large => "Large",
        }
    }

    /// CSS padding for this size variant.
    pub fn padding(self) -> &'static str {
        match self {
            ButtonSize::Small => "0.5em 1.5em",
            ButtonSize::Medium => "0.75em 2em",
            ButtonSize::Large => "1em 3em",
        }
    }

    /// CSS font-size for this size variant.
    pub fn font_size(self) -> &'static str {
        match self {
            ButtonSize::Small => "0.875rem",
            ButtonSize::Medium => "1rem",
            ButtonSize::Large => "1.125rem",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ButtonSize::Small => ButtonSize::Medium,
            ButtonSize::Medium => ButtonSize::Large,
            ButtonSize::Large => ButtonSize::Small,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ButtonSize::Small => ButtonSize::Large,
            ButtonSize::Medium => ButtonSize::Small,
            ButtonSize::Large => ButtonSize::Medium,
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(ButtonSize::Small),
            "medium" => Ok(ButtonSize::Medium),
            "large" => Ok(ButtonSize::Large),
            other => Err(Error::invalid_parameter(format!(
                "unknown size '{other}' (expected small, medium, or large)"
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Hue Presets
// ─────────────────────────────────────────────────────────────────

/// Named hue presets. The closed set of selectable colors; `degrees()` is
/// the preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HuePreset {
    Blue,
    #[default]
    Green,
    Red,
    Purple,
    Orange,
    Pink,
    Teal,
    Yellow,
    Magenta,
    Cyan,
}

impl HuePreset {
    pub const ALL: [HuePreset; 10] = [
        HuePreset::Blue,
        HuePreset::Green,
        HuePreset::Red,
        HuePreset::Purple,
        HuePreset::Orange,
        HuePreset::Pink,
        HuePreset::Teal,
        HuePreset::Yellow,
        HuePreset::Magenta,
        HuePreset::Cyan,
    ];

    /// Tabulated OKLCH hue angle for this preset.
    pub fn degrees(self) -> u16 {
        match self {
            HuePreset::Blue => 245,
            HuePreset::Green => 140,
            HuePreset::Red => 15,
            HuePreset::Purple => 280,
            HuePreset::Orange => 35,
            HuePreset::Pink => 320,
            HuePreset::Teal => 180,
            HuePreset::Yellow => 65,
            HuePreset::Magenta => 300,
            HuePreset::Cyan => 200,
        }
    }

    /// Display label for the selector.
    pub fn label(self) -> &'static str {
        match self {
            HuePreset::Blue => "Blue",
            HuePreset::Green => "Green",
            HuePreset::Red => "Red",
            HuePreset::Purple => "Purple",
            HuePreset::Orange => "Orange",
            HuePreset::Pink => "Pink",
            HuePreset::Teal => "Teal",
            HuePreset::Yellow => "Yellow",
            HuePreset::Magenta => "Magenta",
            HuePreset::Cyan => "Cyan",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for HuePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.label().to_ascii_lowercase() == lower)
            .ok_or_else(|| Error::invalid_parameter(format!("unknown hue preset '{s}'")))
    }
}

/// How the hue is selected: a named preset or a custom slider angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSelection {
    /// Named preset from the fixed table.
    Preset(HuePreset),
    /// Manually chosen angle, always in `[0, 360)`.
    Custom(u16),
}

impl Default for HueSelection {
    fn default() -> Self {
        HueSelection::Preset(HuePreset::Green)
    }
}

impl HueSelection {
    /// Resolve to the effective hue angle in `[0, 360)`.
    pub fn resolve(self) -> u16 {
        match self {
            HueSelection::Preset(preset) => preset.degrees(),
            HueSelection::Custom(degrees) => degrees % 360,
        }
    }

    pub fn is_custom(self) -> bool {
        matches!(self, HueSelection::Custom(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Bounded Sliders
// ─────────────────────────────────────────────────────────────────

/// Color saturation (OKLCH chroma), 0.02..=0.60 in steps of 0.02.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Saturation(u16);

impl Saturation {
    pub const MIN: u16 = 2;
    pub const MAX: u16 = 60;
    pub const STEP: u16 = 2;

    /// Construct from hundredths, snapping to the nearest step and clamping.
    pub fn from_hundredths(hundredths: u16) -> Self {
        // Clamp before snapping so the rounding add cannot overflow.
        let clamped = hundredths.min(Self::MAX);
        let snapped = (clamped + Self::STEP / 2) / Self::STEP * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    /// Construct from a raw float (CLI/config input).
    pub fn from_value(value: f64) -> Self {
        let hundredths = (value * 100.0).round().clamp(0.0, u16::MAX as f64) as u16;
        Self::from_hundredths(hundredths)
    }

    pub fn hundredths(self) -> u16 {
        self.0
    }

    pub fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Decimal string exactly as interpolated into CSS ("0.2", "0.06").
    pub fn css(self) -> String {
        format_hundredths(self.0)
    }

    /// Halved chroma used for the foreground color. Steps are even, so the
    /// halved value is always exact.
    pub fn halved_css(self) -> String {
        format_hundredths(self.0 / 2)
    }

    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }

    /// Position within the slider range, 0.0..=1.0.
    pub fn ratio(self) -> f64 {
        (self.0 - Self::MIN) as f64 / (Self::MAX - Self::MIN) as f64
    }
}

impl Default for Saturation {
    fn default() -> Self {
        Self(20)
    }
}

impl fmt::Display for Saturation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

/// Bottom glow intensity (gradient alpha), 0.30..=1.00 in steps of 0.05.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glow(u16);

impl Glow {
    pub const MIN: u16 = 30;
    pub const MAX: u16 = 100;
    pub const STEP: u16 = 5;

    /// Construct from hundredths, snapping to the nearest step and clamping.
    pub fn from_hundredths(hundredths: u16) -> Self {
        // Clamp before snapping so the rounding add cannot overflow.
        let clamped = hundredths.min(Self::MAX);
        let snapped = (clamped + Self::STEP / 2) / Self::STEP * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    /// Construct from a raw float (CLI/config input).
    pub fn from_value(value: f64) -> Self {
        let hundredths = (value * 100.0).round().clamp(0.0, u16::MAX as f64) as u16;
        Self::from_hundredths(hundredths)
    }

    pub fn hundredths(self) -> u16 {
        self.0
    }

    pub fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Decimal string exactly as interpolated into CSS ("0.7", "1").
    pub fn css(self) -> String {
        format_hundredths(self.0)
    }

    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }

    /// Position within the slider range, 0.0..=1.0.
    pub fn ratio(self) -> f64 {
        (self.0 - Self::MIN) as f64 / (Self::MAX - Self::MIN) as f64
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self(70)
    }
}

impl fmt::Display for Glow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

// ─────────────────────────────────────────────────────────────────
// Parameters
// ─────────────────────────────────────────────────────────────────

/// The full set of user-adjustable parameters.
///
/// Created with fixed defaults at startup, mutated only by the update loop
/// in response to user input, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonParams {
    /// Button label text, embedded literally in the markup snippet.
    pub text: String,
    pub size: ButtonSize,
    pub hue: HueSelection,
    pub saturation: Saturation,
    pub glow: Glow,
}

impl Default for ButtonParams {
    fn default() -> Self {
        Self {
            text: "Accept".to_string(),
            size: ButtonSize::Large,
            hue: HueSelection::default(),
            saturation: Saturation::default(),
            glow: Glow::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table_degrees() {
        // Exact tabulated values, all ten presets.
        assert_eq!(HuePreset::Blue.degrees(), 245);
        assert_eq!(HuePreset::Green.degrees(), 140);
        assert_eq!(HuePreset::Red.degrees(), 15);
        assert_eq!(HuePreset::Purple.degrees(), 280);
        assert_eq!(HuePreset::Orange.degrees(), 35);
        assert_eq!(HuePreset::Pink.degrees(), 320);
        assert_eq!(HuePreset::Teal.degrees(), 180);
        assert_eq!(HuePreset::Yellow.degrees(), 65);
        assert_eq!(HuePreset::Magenta.degrees(), 300);
        assert_eq!(HuePreset::Cyan.degrees(), 200);
    }

    #[test]
    fn test_resolve_preset_matches_table() {
        for preset in HuePreset::ALL {
            assert_eq!(HueSelection::Preset(preset).resolve(), preset.degrees());
        }
    }

    #[test]
    fn test_resolve_custom_stays_in_range() {
        assert_eq!(HueSelection::Custom(140).resolve(), 140);
        assert_eq!(HueSelection::Custom(360).resolve(), 0);
        assert_eq!(HueSelection::Custom(359).resolve(), 359);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0), 0);
        assert_eq!(wrap_hue(360), 0);
        assert_eq!(wrap_hue(-1), 359);
        assert_eq!(wrap_hue(725), 5);
    }

    #[test]
    fn test_preset_cycle_roundtrip() {
        for preset in HuePreset::ALL {
            assert_eq!(preset.next().prev(), preset);
        }
        assert_eq!(HuePreset::Cyan.next(), HuePreset::Blue);
    }

    #[test]
    fn test_size_cycle() {
        assert_eq!(ButtonSize::Small.next(), ButtonSize::Medium);
        assert_eq!(ButtonSize::Large.next(), ButtonSize::Small);
        assert_eq!(ButtonSize::Small.prev(), ButtonSize::Large);
    }

    #[test]
    fn test_size_parse() {
        assert_eq!("large".parse::<ButtonSize>().unwrap(), ButtonSize::Large);
        assert_eq!("Medium".parse::<ButtonSize>().unwrap(), ButtonSize::Medium);
        assert!("huge".parse::<ButtonSize>().is_err());
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("green".parse::<HuePreset>().unwrap(), HuePreset::Green);
        assert_eq!("Teal".parse::<HuePreset>().unwrap(), HuePreset::Teal);
        assert!("mauve".parse::<HuePreset>().is_err());
    }

    #[test]
    fn test_saturation_bounds_and_stepping() {
        let sat = Saturation::default();
        assert_eq!(sat.hundredths(), 20);

        let mut low = sat;
        for _ in 0..50 {
            low = low.step_down();
        }
        assert_eq!(low.hundredths(), Saturation::MIN);

        let mut high = sat;
        for _ in 0..50 {
            high = high.step_up();
        }
        assert_eq!(high.hundredths(), Saturation::MAX);
    }

    #[test]
    fn test_saturation_decimal_formatting_is_exact() {
        // Every reachable slider position prints a clean decimal.
        let mut sat = Saturation::from_hundredths(Saturation::MIN);
        loop {
            let css = sat.css();
            assert!(
                css.len() <= 4,
                "saturation {} printed as '{}'",
                sat.hundredths(),
                css
            );
            if sat.hundredths() == Saturation::MAX {
                break;
            }
            sat = sat.step_up();
        }
        assert_eq!(Saturation::from_hundredths(6).css(), "0.06");
        assert_eq!(Saturation::from_hundredths(20).css(), "0.2");
    }

    #[test]
    fn test_saturation_halved() {
        assert_eq!(Saturation::from_hundredths(20).halved_css(), "0.1");
        assert_eq!(Saturation::from_hundredths(2).halved_css(), "0.01");
        assert_eq!(Saturation::from_hundredths(60).halved_css(), "0.3");
    }

    #[test]
    fn test_saturation_from_value_snaps() {
        assert_eq!(Saturation::from_value(0.2).hundredths(), 20);
        assert_eq!(Saturation::from_value(0.21).hundredths(), 22);
        assert_eq!(Saturation::from_value(5.0).hundredths(), Saturation::MAX);
        assert_eq!(Saturation::from_value(-1.0).hundredths(), Saturation::MIN);
    }

    #[test]
    fn test_slider_extreme_inputs_clamp() {
        // Values near the u16 ceiling must clamp to MAX, not overflow
        // during step rounding.
        assert_eq!(Saturation::from_value(655.35).hundredths(), Saturation::MAX);
        assert_eq!(Glow::from_value(655.35).hundredths(), Glow::MAX);
        assert_eq!(Saturation::from_hundredths(u16::MAX).hundredths(), Saturation::MAX);
        assert_eq!(Glow::from_hundredths(u16::MAX).hundredths(), Glow::MAX);
    }

    #[test]
    fn test_glow_bounds_and_formatting() {
        let glow = Glow::default();
        assert_eq!(glow.css(), "0.7");
        assert_eq!(Glow::from_hundredths(100).css(), "1");
        assert_eq!(Glow::from_hundredths(0).hundredths(), Glow::MIN);
        assert_eq!(Glow::from_value(0.33).hundredths(), 35);
        assert_eq!(glow.step_up().hundredths(), 75);
    }

    #[test]
    fn test_slider_ratio_endpoints() {
        assert_eq!(Saturation::from_hundredths(Saturation::MIN).ratio(), 0.0);
        assert_eq!(Saturation::from_hundredths(Saturation::MAX).ratio(), 1.0);
        assert_eq!(Glow::from_hundredths(Glow::MAX).ratio(), 1.0);
    }

    #[test]
    fn test_default_params() {
        let params = ButtonParams::default();
        assert_eq!(params.text, "Accept");
        assert_eq!(params.size, ButtonSize::Large);
        assert_eq!(params.hue, HueSelection::Preset(HuePreset::Green));
        assert_eq!(params.hue.resolve(), 140);
    }
}
