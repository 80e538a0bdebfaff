//! Message handling (Update in TEA pattern)
//!
//! Split into:
//! - `keys`: raw key -> semantic message translation
//! - `update`: state transitions for every message
//!
//! `update()` is a pure function over `AppState`; side effects are
//! returned as [`UpdateAction`]s for the runtime to execute.

mod keys;
mod update;

pub use keys::handle_key;
pub use update::update;

use crate::message::{CopyKind, Message};

/// Side effects requested by `update()`, executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Re-highlight the stylesheet in the background.
    SpawnHighlight {
        source: String,
        generation: u64,
        theme: String,
    },
    /// Write text to the system clipboard.
    CopyToClipboard { text: String, kind: CopyKind },
}

/// Result of a single update step: an optional follow-up message and an
/// optional side effect.
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
