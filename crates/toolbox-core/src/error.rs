//! Error types for tool generation and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Rejected wizard input. Recoverable: the wizard stays on the current step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty (or whitespace-only) value for a required field
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// Tool name outside the slug alphabet
    #[error("invalid tool name '{name}': use lowercase letters, numbers, and hyphens only")]
    InvalidName { name: String },
}

/// Failure while generating a tool
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A file already exists where an artifact would be written
    #[error("{} already exists (choose a different tool name)", path.display())]
    NameCollision { path: PathBuf },

    /// Directory or file creation failed
    #[error("failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embedded template set is inconsistent. A build defect, never user-triggered.
    #[error("template '{template}' is malformed: {reason}")]
    Template {
        template: &'static str,
        reason: String,
    },
}

impl GenerateError {
    /// True when retrying with a different tool name can succeed
    pub fn is_collision(&self) -> bool {
        matches!(self, GenerateError::NameCollision { .. })
    }
}

/// Failure while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid log level '{value}' (expected trace, debug, info, warn, error or off)")]
    InvalidLogLevel { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_surfaces_io_message() {
        let err = GenerateError::Filesystem {
            path: PathBuf::from("cmd/cli/pinger"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let message = err.to_string();
        assert!(message.contains("cmd/cli/pinger"));
        assert!(message.contains("permission denied"));
        assert!(!err.is_collision());
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: GenerateError = ValidationError::EmptyField { field: "description" }.into();
        assert_eq!(err.to_string(), "description cannot be empty");
    }

    #[test]
    fn test_collision_is_detected() {
        let err = GenerateError::NameCollision {
            path: PathBuf::from("cmd/cli/pinger/main.rs"),
        };
        assert!(err.is_collision());
        assert!(err.to_string().contains("already exists"));
    }
}
