//! Key event translation
//!
//! Turns raw [`InputKey`]s into semantic [`Message`]s based on which
//! control currently has focus. No state is mutated here.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Control};

/// Translate a key press into a message, or `None` when the key is
/// not bound in the current focus context.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings, independent of focus.
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Esc => return Some(Message::Quit),
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrev),
        InputKey::PageUp => return Some(Message::ScrollOutputUp),
        InputKey::PageDown => return Some(Message::ScrollOutputDown),
        _ => {}
    }

    if state.focus == Control::Text {
        return handle_text_key(state, key);
    }

    // Shortcuts active everywhere except the text field, where the
    // letters must type.
    match key {
        InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Char('c') => return Some(Message::CopyStylesheet),
        InputKey::Char('h') => return Some(Message::CopyMarkup),
        _ => {}
    }

    match state.focus {
        Control::Text => unreachable!("handled above"),
        Control::Size => match key {
            InputKey::Left => Some(Message::PrevSize),
            InputKey::Right => Some(Message::NextSize),
            _ => None,
        },
        Control::HueSelect => match key {
            InputKey::Left => Some(Message::PrevHuePreset),
            InputKey::Right => Some(Message::NextHuePreset),
            InputKey::Enter => Some(Message::ToggleCustomHue),
            _ => None,
        },
        Control::CustomHue => match key {
            InputKey::Left => Some(Message::AdjustHue(-1)),
            InputKey::Right => Some(Message::AdjustHue(1)),
            InputKey::Char('[') => Some(Message::AdjustHue(-10)),
            InputKey::Char(']') => Some(Message::AdjustHue(10)),
            InputKey::Enter => Some(Message::ToggleCustomHue),
            _ => None,
        },
        Control::Saturation => match key {
            InputKey::Left => Some(Message::AdjustSaturation(-1)),
            InputKey::Right => Some(Message::AdjustSaturation(1)),
            _ => None,
        },
        Control::Glow => match key {
            InputKey::Left => Some(Message::AdjustGlow(-1)),
            InputKey::Right => Some(Message::AdjustGlow(1)),
            _ => None,
        },
    }
}

/// Key handling while the text field has focus: printable characters
/// edit the field, Ctrl+U clears it.
fn handle_text_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut text = state.params.text.clone();
            text.push(c);
            Some(Message::TextChanged { text })
        }
        InputKey::Backspace => {
            let mut text = state.params.text.clone();
            text.pop();
            Some(Message::TextChanged { text })
        }
        InputKey::CharCtrl('u') => Some(Message::TextChanged {
            text: String::new(),
        }),
        _ => None,
    }
}
