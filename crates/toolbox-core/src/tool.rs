//! Tool types, names and the finalized `ToolSpec`

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Kinds of tool the generator can scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolType {
    Cli,
    Tui,
    Web,
}

impl ToolType {
    /// Every tool type, in menu order
    pub const ALL: [ToolType; 3] = [ToolType::Cli, ToolType::Tui, ToolType::Web];

    pub fn display_name(&self) -> &'static str {
        match self {
            ToolType::Cli => "CLI",
            ToolType::Tui => "TUI",
            ToolType::Web => "Web",
        }
    }

    /// Directory segment the tool is generated under
    pub fn dir_name(&self) -> &'static str {
        match self {
            ToolType::Cli => "cli",
            ToolType::Tui => "tui",
            ToolType::Web => "web",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            ToolType::Cli => "CLI Tool",
            ToolType::Tui => "TUI Tool",
            ToolType::Web => "Web Tool",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ToolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cli" => Ok(ToolType::Cli),
            "tui" => Ok(ToolType::Tui),
            "web" => Ok(ToolType::Web),
            other => Err(format!(
                "unknown tool type '{}' (expected cli, tui or web)",
                other
            )),
        }
    }
}

/// Check a tool name against the slug alphabet: `^[a-z0-9-]+$`
pub fn validate_tool_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// A validated tool name (lowercase letters, digits and hyphens)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolName(String);

impl ToolName {
    /// Trim and validate raw input
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "tool name" });
        }
        if !validate_tool_name(name) {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title: `file-hasher` becomes `File Hasher`
    pub fn title(&self) -> String {
        self.0
            .split('-')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Environment variable prefix: `file-hasher` becomes `FILE_HASHER`
    pub fn env_prefix(&self) -> String {
        self.0.to_ascii_uppercase().replace('-', "_")
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything needed to generate a tool. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    tool_type: ToolType,
    name: ToolName,
    description: String,
}

impl ToolSpec {
    pub fn new(
        tool_type: ToolType,
        name: ToolName,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let description = single_line(description);
        if description.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "description",
            });
        }
        Ok(Self {
            tool_type,
            name,
            description,
        })
    }

    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    pub fn name(&self) -> &ToolName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Collapse line breaks, other control characters and whitespace runs into single spaces
fn single_line(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
