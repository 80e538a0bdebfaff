//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use aeroforge_core::prelude::*;
use aeroforge_core::{ButtonParams, GeneratedOutput, HuePreset, HueSelection};

use crate::config::Settings;
use crate::highlight::HighlightedLine;

/// How long a copy/error flash stays in the status bar.
pub const FLASH_DURATION: Duration = Duration::from_secs(2);

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The focusable controls, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Button text field
    #[default]
    Text,
    /// Size toggle group
    Size,
    /// Hue preset selector
    HueSelect,
    /// Custom hue slider (only reachable in custom hue mode)
    CustomHue,
    /// Saturation slider
    Saturation,
    /// Glow intensity slider
    Glow,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Text => "Button Text",
            Control::Size => "Size",
            Control::HueSelect => "Color",
            Control::CustomHue => "Custom Hue",
            Control::Saturation => "Color Saturation",
            Control::Glow => "Bottom Glow Intensity",
        }
    }

    /// Focus order, with the custom hue slider present only in custom mode.
    fn order(custom_visible: bool) -> &'static [Control] {
        if custom_visible {
            &[
                Control::Text,
                Control::Size,
                Control::HueSelect,
                Control::CustomHue,
                Control::Saturation,
                Control::Glow,
            ]
        } else {
            &[
                Control::Text,
                Control::Size,
                Control::HueSelect,
                Control::Saturation,
                Control::Glow,
            ]
        }
    }

    pub fn next(self, custom_visible: bool) -> Control {
        let order = Self::order(custom_visible);
        let idx = order.iter().position(|c| *c == self).unwrap_or(0);
        order[(idx + 1) % order.len()]
    }

    pub fn prev(self, custom_visible: bool) -> Control {
        let order = Self::order(custom_visible);
        let idx = order.iter().position(|c| *c == self).unwrap_or(0);
        order[(idx + order.len() - 1) % order.len()]
    }
}

/// View state of the generated stylesheet pane.
#[derive(Debug, Clone, Default)]
pub struct OutputViewState {
    /// Bumped on every regeneration; highlight results for older
    /// generations are dropped.
    pub generation: u64,
    /// Highlighted lines, when the background task has caught up.
    /// `None` displays the raw text (startup, or after a failure).
    pub highlighted: Option<Vec<HighlightedLine>>,
    /// Vertical scroll offset.
    pub scroll: u16,
}

/// A transient status bar notice.
#[derive(Debug, Clone)]
pub struct StatusFlash {
    pub text: String,
    pub is_error: bool,
    shown_at: Instant,
}

impl StatusFlash {
    pub fn new(text: impl Into<String>, is_error: bool) -> Self {
        Self {
            text: text.into(),
            is_error,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= FLASH_DURATION
    }
}

/// The complete application state.
pub struct AppState {
    /// Current parameter values; the single source of truth.
    pub params: ButtonParams,
    /// Which control has keyboard focus.
    pub focus: Control,
    pub phase: AppPhase,
    /// Generated outputs, recomputed eagerly on every parameter change.
    pub output: GeneratedOutput,
    pub view: OutputViewState,
    pub status_flash: Option<StatusFlash>,
    pub settings: Settings,
    /// Preset restored when leaving custom hue mode.
    pub last_preset: HuePreset,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Build the initial state, seeding parameters from `[defaults]`.
    pub fn with_settings(settings: Settings) -> Self {
        let mut params = ButtonParams {
            text: settings.defaults.text.clone(),
            size: settings.defaults.size,
            ..ButtonParams::default()
        };
        params.hue = parse_hue_default(&settings.defaults.hue);

        let last_preset = match params.hue {
            HueSelection::Preset(preset) => preset,
            HueSelection::Custom(_) => HuePreset::default(),
        };

        let output = GeneratedOutput::from_params(&params);
        Self {
            params,
            focus: Control::default(),
            phase: AppPhase::default(),
            output,
            view: OutputViewState::default(),
            status_flash: None,
            settings,
            last_preset,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn custom_hue_visible(&self) -> bool {
        self.params.hue.is_custom()
    }

    /// Recompute both outputs and bump the highlight generation.
    ///
    /// The previous highlighted text stays on screen until the new result
    /// arrives; the raw text in `output` is already current.
    pub fn regenerate(&mut self) -> u64 {
        self.output = GeneratedOutput::from_params(&self.params);
        self.view.generation += 1;
        self.view.generation
    }

    /// Switch preset -> custom (seeding the slider with the resolved
    /// preset hue) or custom -> preset (restoring the last preset).
    pub fn toggle_custom_hue(&mut self) {
        match self.params.hue {
            HueSelection::Preset(preset) => {
                self.last_preset = preset;
                self.params.hue = HueSelection::Custom(preset.degrees());
                self.focus = Control::CustomHue;
            }
            HueSelection::Custom(_) => {
                self.params.hue = HueSelection::Preset(self.last_preset);
                if self.focus == Control::CustomHue {
                    self.focus = Control::HueSelect;
                }
            }
        }
    }

    pub fn flash(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_flash = Some(StatusFlash::new(text, is_error));
    }

    /// Expire the status flash; called on every tick.
    pub fn tick(&mut self) {
        if self
            .status_flash
            .as_ref()
            .is_some_and(StatusFlash::is_expired)
        {
            self.status_flash = None;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the `[defaults] hue` value: preset name first, then degrees.
fn parse_hue_default(value: &str) -> HueSelection {
    if let Ok(preset) = value.parse::<HuePreset>() {
        return HueSelection::Preset(preset);
    }
    if let Ok(degrees) = value.parse::<i32>() {
        return HueSelection::Custom(aeroforge_core::wrap_hue(degrees));
    }
    warn!("Invalid default hue '{value}', using green");
    HueSelection::default()
}
