//! Terminal driver using console
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod terminal;

#[cfg(feature = "tui")]
pub use terminal::{run, translate_key};
