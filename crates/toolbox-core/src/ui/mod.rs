//! Screen model and navigation
//!
//! Screens are pure: `update` returns an [`Effect`] instead of acting, and
//! `render` produces the full frame as text. The [`Navigator`] applies effects.

pub mod feature;
pub mod generator;
pub mod key;
pub mod main_menu;
pub mod navigator;
pub mod screen;

pub use feature::{Feature, FeatureScreen};
pub use generator::GeneratorScreen;
pub use key::Key;
pub use main_menu::{MainMenu, MenuItem};
pub use navigator::{Flow, Navigator, SessionContext};
pub use screen::{Effect, Screen};
