//! Custom widget components

mod controls;
mod header;
mod output_view;
mod preview;
mod status_bar;

pub use controls::ControlsPanel;
pub use header::MainHeader;
pub use output_view::OutputView;
pub use preview::ButtonPreview;
pub use status_bar::StatusBar;
