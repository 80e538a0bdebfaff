//! System clipboard access.
//!
//! A fresh arboard handle is created per call; keeping one open pins the
//! X11 selection on some platforms.

use aeroforge_core::prelude::*;

/// Place UTF-8 text onto the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| Error::clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_error_is_recoverable() {
        // Headless CI has no clipboard; either outcome must be survivable.
        if let Err(err) = copy_text("test") {
            assert!(err.is_recoverable());
        }
    }
}
