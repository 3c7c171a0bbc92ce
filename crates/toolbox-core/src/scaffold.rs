//! Writing rendered tool skeletons to disk without overwriting anything

use crate::error::GenerateError;
use crate::templates::{render_artifacts, Artifact};
use crate::tool::ToolSpec;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permissions for created directories (Unix only)
#[cfg(unix)]
const DIR_MODE: u32 = 0o750;

/// What a successful generation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Directory the tool was generated into
    pub destination: PathBuf,
    /// Every file written, in template order
    pub created: Vec<PathBuf>,
}

impl GenerationReport {
    /// Commands to build and try the generated tool
    pub fn next_steps(&self) -> Vec<String> {
        let Some(main) = self.created.first() else {
            return Vec::new();
        };
        let binary = self.destination.join(
            self.destination
                .file_name()
                .unwrap_or_else(|| "tool".as_ref()),
        );
        vec![
            format!("rustc {} -o {}", main.display(), binary.display()),
            binary.display().to_string(),
        ]
    }
}

/// Creates tool directories under a fixed output root
#[derive(Debug, Clone)]
pub struct Scaffolder {
    output_root: PathBuf,
}

impl Scaffolder {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// `<output root>/<tool type>/<tool name>`
    pub fn destination_for(&self, spec: &ToolSpec) -> PathBuf {
        self.output_root
            .join(spec.tool_type().dir_name())
            .join(spec.name().as_str())
    }

    /// Render and write the tool. Fails rather than replacing an existing file.
    pub fn generate(&self, spec: &ToolSpec) -> Result<GenerationReport, GenerateError> {
        let artifacts = render_artifacts(spec)?;
        let destination = self.destination_for(spec);

        tracing::debug!(
            tool = %spec.name(),
            tool_type = %spec.tool_type(),
            destination = %destination.display(),
            "generating tool"
        );

        create_dir(&destination)?;

        // Check every target first so a collision leaves the tree untouched.
        for artifact in &artifacts {
            let target = destination.join(&artifact.relative_path);
            if target.is_file() {
                tracing::warn!(path = %target.display(), "refusing to overwrite existing file");
                return Err(GenerateError::NameCollision { path: target });
            }
        }

        let mut created = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            created.push(write_artifact(&destination, artifact)?);
        }

        tracing::info!(
            tool = %spec.name(),
            files = created.len(),
            "tool generated"
        );

        Ok(GenerationReport {
            destination,
            created,
        })
    }
}

/// Recursive and idempotent: an existing directory is fine
fn create_dir(path: &Path) -> Result<(), GenerateError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|source| GenerateError::Filesystem {
            path: path.to_path_buf(),
            source,
        })
}

fn write_artifact(destination: &Path, artifact: &Artifact) -> Result<PathBuf, GenerateError> {
    let target = destination.join(&artifact.relative_path);
    if let Some(parent) = target.parent() {
        create_dir(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => GenerateError::NameCollision {
                path: target.clone(),
            },
            _ => GenerateError::Filesystem {
                path: target.clone(),
                source,
            },
        })?;

    file.write_all(artifact.contents.as_bytes())
        .map_err(|source| GenerateError::Filesystem {
            path: target.clone(),
            source,
        })?;

    Ok(target)
}
