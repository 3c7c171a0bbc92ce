//! Fixed tool skeletons and their rendering
//!
//! This module provides:
//! - The embedded template set for each tool type
//! - Rendering of a `ToolSpec` into artifacts ready to be written

pub mod render;

use crate::error::GenerateError;
use crate::tool::{ToolSpec, ToolType};
use render::Variables;
use std::path::PathBuf;

pub use render::{html_escape, rust_string_literal, substitute};

/// A fixed, embedded template and where its output goes inside the tool directory
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub relative_path: &'static str,
    pub source: &'static str,
}

/// A rendered file, relative to the tool's destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub relative_path: PathBuf,
    pub contents: String,
}

const CLI_TEMPLATES: &[Template] = &[Template {
    name: "cli-main",
    relative_path: "main.rs",
    source: include_str!("../../templates/cli_main.rs.tmpl"),
}];

const TUI_TEMPLATES: &[Template] = &[Template {
    name: "tui-main",
    relative_path: "main.rs",
    source: include_str!("../../templates/tui_main.rs.tmpl"),
}];

const WEB_TEMPLATES: &[Template] = &[
    Template {
        name: "web-main",
        relative_path: "main.rs",
        source: include_str!("../../templates/web_main.rs.tmpl"),
    },
    Template {
        name: "web-index",
        relative_path: "templates/index.html",
        source: include_str!("../../templates/web_index.html.tmpl"),
    },
    Template {
        name: "web-style",
        relative_path: "static/style.css",
        source: include_str!("../../templates/web_style.css.tmpl"),
    },
];

/// The templates rendered for a tool type. The primary source file comes first.
pub fn template_set(tool_type: ToolType) -> &'static [Template] {
    match tool_type {
        ToolType::Cli => CLI_TEMPLATES,
        ToolType::Tui => TUI_TEMPLATES,
        ToolType::Web => WEB_TEMPLATES,
    }
}

fn variables(spec: &ToolSpec) -> Variables {
    let name = spec.name();
    let mut vars = Variables::new();
    vars.insert("tool_name", name.to_string());
    vars.insert("tool_title", name.title());
    vars.insert("env_prefix", name.env_prefix());
    vars.insert("tool_type", spec.tool_type().display_name().to_string());
    vars.insert("description", spec.description().to_string());
    vars.insert(
        "description_literal",
        rust_string_literal(spec.description()),
    );
    vars.insert("description_html", html_escape(spec.description()));
    vars
}

/// Render every template for the tool's type
pub fn render_artifacts(spec: &ToolSpec) -> Result<Vec<Artifact>, GenerateError> {
    let vars = variables(spec);

    template_set(spec.tool_type())
        .iter()
        .map(|template| {
            Ok(Artifact {
                relative_path: PathBuf::from(template.relative_path),
                contents: substitute(template.name, template.source, &vars)?,
            })
        })
        .collect()
}
