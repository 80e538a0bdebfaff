//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: entry point that owns terminal setup/teardown
//! - `run_loop`: main event loop processing terminal events and
//!   results from the background clipboard/highlight tasks

use std::sync::Arc;

use tokio::sync::mpsc;

use aeroforge_app::clipboard;
use aeroforge_app::handler::{self, UpdateAction};
use aeroforge_app::highlight::Highlighter;
use aeroforge_app::message::Message;
use aeroforge_app::state::AppState;
use aeroforge_app::Settings;
use aeroforge_core::prelude::*;

use super::{event, render, signals, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::with_settings(settings);

    // Unified message channel (signal handler, background tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Syntax sets are expensive to load; build once and share
    let highlighter = Arc::new(Highlighter::new());

    // Kick off the highlight for the initial stylesheet
    if state.settings.ui.highlight {
        spawn_highlight(
            highlighter.clone(),
            msg_tx.clone(),
            state.output.css.clone(),
            state.view.generation,
            state.settings.ui.syntax_theme.clone(),
        );
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, highlighter);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    highlighter: Arc<Highlighter>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (signal handler, background tasks)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &highlighter);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &highlighter);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, following any
/// chained messages and executing requested side effects.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    highlighter: &Arc<Highlighter>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), highlighter.clone());
        }

        msg = result.message;
    }
}

/// Execute a side effect on a background task
fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, highlighter: Arc<Highlighter>) {
    match action {
        UpdateAction::SpawnHighlight {
            source,
            generation,
            theme,
        } => spawn_highlight(highlighter, msg_tx, source, generation, theme),

        UpdateAction::CopyToClipboard { text, kind } => {
            tokio::task::spawn_blocking(move || {
                let message = match clipboard::copy_text(&text) {
                    Ok(()) => Message::CopyCompleted(kind),
                    Err(e) => Message::CopyFailed {
                        message: e.to_string(),
                    },
                };
                if msg_tx.blocking_send(message).is_err() {
                    warn!("Message channel closed before clipboard result was sent");
                }
            });
        }
    }
}

/// Highlight on a blocking task; the result carries its generation so
/// stale runs are dropped by the update function.
fn spawn_highlight(
    highlighter: Arc<Highlighter>,
    msg_tx: mpsc::Sender<Message>,
    source: String,
    generation: u64,
    theme: String,
) {
    tokio::task::spawn_blocking(move || {
        let message = match highlighter.highlight(&source, &theme) {
            Ok(lines) => Message::HighlightReady { generation, lines },
            Err(e) => Message::HighlightFailed {
                generation,
                message: e.to_string(),
            },
        };
        if msg_tx.blocking_send(message).is_err() {
            debug!("Message channel closed before highlight result was sent");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroforge_app::message::CopyKind;

    #[tokio::test]
    async fn test_process_message_chains_key_to_update() {
        let mut state = AppState::new();
        let (msg_tx, _msg_rx) = mpsc::channel::<Message>(8);
        let highlighter = Arc::new(Highlighter::new());

        process_message(&mut state, Message::NextSize, &msg_tx, &highlighter);
        assert!(state.output.markup.contains("small"));
    }

    #[tokio::test]
    async fn test_highlight_result_arrives_on_channel() {
        let mut state = AppState::new();
        let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(8);
        let highlighter = Arc::new(Highlighter::new());

        // NextSize regenerates and requests a highlight.
        process_message(&mut state, Message::NextSize, &msg_tx, &highlighter);

        let message = tokio::time::timeout(std::time::Duration::from_secs(10), msg_rx.recv())
            .await
            .expect("highlight result in time")
            .expect("channel open");
        match message {
            Message::HighlightReady { generation, lines } => {
                assert_eq!(generation, 1);
                assert!(!lines.is_empty());
            }
            Message::HighlightFailed { .. } => {}
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_quit_message_stops_loop_condition() {
        let mut state = AppState::new();
        let (msg_tx, _msg_rx) = mpsc::channel::<Message>(8);
        let highlighter = Arc::new(Highlighter::new());

        process_message(&mut state, Message::Quit, &msg_tx, &highlighter);
        assert!(state.should_quit());
    }

    #[tokio::test]
    async fn test_copy_failure_is_reported_not_fatal() {
        // In a headless environment the clipboard may be unavailable; the
        // result must come back as a message either way.
        let mut state = AppState::new();
        let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(8);
        let highlighter = Arc::new(Highlighter::new());

        process_message(&mut state, Message::CopyMarkup, &msg_tx, &highlighter);

        let message = tokio::time::timeout(std::time::Duration::from_secs(10), msg_rx.recv())
            .await
            .expect("clipboard result in time")
            .expect("channel open");
        assert!(matches!(
            message,
            Message::CopyCompleted(CopyKind::Markup) | Message::CopyFailed { .. }
        ));
    }
}
