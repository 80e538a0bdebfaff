//! Terminal lifecycle
//!
//! `runner::run` owns `ratatui::init`/`restore`; this module only covers
//! the panic path, since a panic inside the draw loop or a widget would
//! otherwise leave the shell in raw mode behind the generator UI.

/// Install a panic hook that restores the terminal before the default
/// hook prints the panic message.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
