//! Toolbox Core - Shared library for the toolbox terminal UI
//!
//! This library provides the interactive session engine behind `toolbox-tui`:
//! a navigable stack of screens and a tool generator wizard that validates
//! user input and scaffolds new tools from fixed templates.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Tool value types, template rendering and
//!   the filesystem scaffolder (`tool`, `templates`, `scaffold`)
//! - **Layer 2: Session State** - The wizard state machine, screen variants and
//!   the navigation controller (`wizard`, `ui`). Pure, no terminal access
//! - **Layer 3: Terminal Interface** - `console`-based input/render loop
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal driver in the `tui` module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use toolbox_core::{Scaffolder, ToolName, ToolSpec, ToolType};
//!
//! let spec = ToolSpec::new(ToolType::Cli, ToolName::parse("pinger")?, "Pings a host")?;
//! let report = Scaffolder::new("cmd").generate(&spec)?;
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod scaffold;
pub mod templates;
pub mod tool;
pub mod ui;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Config;
pub use error::{ConfigError, GenerateError, ValidationError};
pub use scaffold::{GenerationReport, Scaffolder};
pub use templates::{render_artifacts, Artifact};
pub use tool::{validate_tool_name, ToolName, ToolSpec, ToolType};
pub use ui::{Flow, Key, Navigator, SessionContext};

#[cfg(feature = "tui")]
pub use tui::run;
