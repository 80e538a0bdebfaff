//! State transitions for every message.

use aeroforge_core::prelude::*;
use aeroforge_core::{wrap_hue, HueSelection};

use crate::handler::keys::handle_key;
use crate::handler::{UpdateAction, UpdateResult};
use crate::message::{CopyKind, Message};
use crate::state::{AppPhase, AppState};

/// Apply a message to the state, returning an optional follow-up
/// message and an optional side effect.
pub fn update(state: &mut AppState, msg: Message) -> UpdateResult {
    match msg {
        Message::Key(key) => match handle_key(state, key) {
            Some(next) => UpdateResult::message(next),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus = state.focus.next(state.custom_hue_visible());
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev(state.custom_hue_visible());
            UpdateResult::none()
        }

        Message::TextChanged { text } => {
            state.params.text = text;
            regenerate(state)
        }

        Message::NextSize => {
            state.params.size = state.params.size.next();
            regenerate(state)
        }

        Message::PrevSize => {
            state.params.size = state.params.size.prev();
            regenerate(state)
        }

        Message::NextHuePreset => adjust_preset(state, true),
        Message::PrevHuePreset => adjust_preset(state, false),

        Message::ToggleCustomHue => {
            state.toggle_custom_hue();
            regenerate(state)
        }

        Message::AdjustHue(delta) => {
            if let HueSelection::Custom(hue) = state.params.hue {
                state.params.hue = HueSelection::Custom(wrap_hue(hue as i32 + delta));
                regenerate(state)
            } else {
                UpdateResult::none()
            }
        }

        Message::AdjustSaturation(steps) => {
            let sat = state.params.saturation;
            state.params.saturation = if steps >= 0 {
                (0..steps).fold(sat, |s, _| s.step_up())
            } else {
                (steps..0).fold(sat, |s, _| s.step_down())
            };
            if state.params.saturation == sat {
                UpdateResult::none()
            } else {
                regenerate(state)
            }
        }

        Message::AdjustGlow(steps) => {
            let glow = state.params.glow;
            state.params.glow = if steps >= 0 {
                (0..steps).fold(glow, |g, _| g.step_up())
            } else {
                (steps..0).fold(glow, |g, _| g.step_down())
            };
            if state.params.glow == glow {
                UpdateResult::none()
            } else {
                regenerate(state)
            }
        }

        Message::ScrollOutputUp => {
            state.view.scroll = state.view.scroll.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollOutputDown => {
            state.view.scroll = state.view.scroll.saturating_add(1);
            UpdateResult::none()
        }

        Message::CopyStylesheet => UpdateResult::action(UpdateAction::CopyToClipboard {
            text: state.output.css.clone(),
            kind: CopyKind::Stylesheet,
        }),

        Message::CopyMarkup => UpdateResult::action(UpdateAction::CopyToClipboard {
            text: state.output.markup.clone(),
            kind: CopyKind::Markup,
        }),

        Message::CopyCompleted(kind) => {
            info!("Copied {} to clipboard", kind.label());
            state.flash(format!("Copied {} to clipboard", kind.label()), false);
            UpdateResult::none()
        }

        Message::CopyFailed { message } => {
            warn!("Clipboard copy failed: {message}");
            state.flash(format!("Copy failed: {message}"), true);
            UpdateResult::none()
        }

        Message::HighlightReady { generation, lines } => {
            // Last write wins: drop results for stale generations.
            if generation == state.view.generation {
                state.view.highlighted = Some(lines);
            } else {
                debug!(
                    "Dropping stale highlight (generation {generation}, current {})",
                    state.view.generation
                );
            }
            UpdateResult::none()
        }

        Message::HighlightFailed {
            generation,
            message,
        } => {
            if generation == state.view.generation {
                warn!("Highlighting failed: {message}");
                state.view.highlighted = None;
            }
            UpdateResult::none()
        }
    }
}

fn adjust_preset(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.params.hue {
        HueSelection::Preset(preset) => {
            let next = if forward { preset.next() } else { preset.prev() };
            state.params.hue = HueSelection::Preset(next);
            state.last_preset = next;
            regenerate(state)
        }
        HueSelection::Custom(_) => UpdateResult::none(),
    }
}

/// Recompute outputs and request a background re-highlight when enabled.
fn regenerate(state: &mut AppState) -> UpdateResult {
    let generation = state.regenerate();
    if !state.settings.ui.highlight {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::SpawnHighlight {
        source: state.output.css.clone(),
        generation,
        theme: state.settings.ui.syntax_theme.clone(),
    })
}
