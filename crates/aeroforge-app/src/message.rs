//! Message types for the application (TEA pattern)

use crate::highlight::HighlightedLine;
use crate::input_key::InputKey;

/// Which generated output a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    /// The full stylesheet text.
    Stylesheet,
    /// The `<button>` markup snippet.
    Markup,
}

impl CopyKind {
    /// Short label used in the status flash.
    pub fn label(self) -> &'static str {
        match self {
            CopyKind::Stylesheet => "CSS",
            CopyKind::Markup => "HTML",
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (status flash expiry)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Parameter Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the button text
    TextChanged { text: String },
    /// Cycle the size category forward
    NextSize,
    /// Cycle the size category backward
    PrevSize,
    /// Cycle the hue preset forward
    NextHuePreset,
    /// Cycle the hue preset backward
    PrevHuePreset,
    /// Switch between preset and custom hue mode
    ToggleCustomHue,
    /// Rotate the custom hue by a degree delta (wraps at 360)
    AdjustHue(i32),
    /// Move the saturation slider by a step count
    AdjustSaturation(i32),
    /// Move the glow slider by a step count
    AdjustGlow(i32),

    // ─────────────────────────────────────────────────────────
    // Output Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the stylesheet view up
    ScrollOutputUp,
    /// Scroll the stylesheet view down
    ScrollOutputDown,

    // ─────────────────────────────────────────────────────────
    // Clipboard Messages
    // ─────────────────────────────────────────────────────────
    /// Copy the stylesheet to the clipboard
    CopyStylesheet,
    /// Copy the markup snippet to the clipboard
    CopyMarkup,
    /// A copy action finished successfully
    CopyCompleted(CopyKind),
    /// A copy action failed
    CopyFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Highlight Messages
    // ─────────────────────────────────────────────────────────
    /// Highlighted stylesheet arrived from the background task
    HighlightReady {
        /// Generation of the source that was highlighted; stale
        /// generations are dropped (last write wins).
        generation: u64,
        lines: Vec<HighlightedLine>,
    },
    /// Highlighting failed; the raw text stays on screen
    HighlightFailed { generation: u64, message: String },
}
