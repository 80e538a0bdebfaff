//! # aeroforge-core - Core Domain Types
//!
//! Foundation crate for Aeroforge. Provides the button parameter model, the
//! derived color expressions, stylesheet/markup rendering, numeric OKLCH
//! conversion for the preview, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Parameters (`params`)
//! - [`ButtonParams`] - The five user-adjustable values
//! - [`ButtonSize`] - Small/Medium/Large size category
//! - [`HuePreset`] - Named hue table (blue=245, green=140, ...)
//! - [`HueSelection`] - Preset or custom hue angle
//! - [`Saturation`], [`Glow`] - Bounded slider values in integer hundredths
//!
//! ### Derivation (`style`, `stylesheet`)
//! - [`DerivedStyle`] - The four CSS color/gradient expressions
//! - [`render_stylesheet()`], [`render_markup()`], [`GeneratedOutput`]
//!
//! ### Preview Colors (`color`)
//! - [`oklch_to_rgb()`] - Numeric OKLCH -> sRGB for terminal rendering
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use aeroforge_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod logging;
pub mod params;
pub mod style;
pub mod stylesheet;

/// Prelude for common imports used throughout all Aeroforge crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::{mix_rgb, oklab_to_rgb, oklch_to_rgb};
pub use error::{Error, Result, ResultExt};
pub use params::{wrap_hue, ButtonParams, ButtonSize, Glow, HuePreset, HueSelection, Saturation};
pub use style::DerivedStyle;
pub use stylesheet::{render_markup, render_stylesheet, GeneratedOutput};
