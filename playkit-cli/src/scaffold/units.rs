//! Adding scenes, objects and components to an existing project

use std::path::{Path, PathBuf};

use serde_json::json;

use super::fs::{resolve_within, write_file};
use super::naming::{is_valid_identifier, unit_identifier};
use crate::error::{Result, ScaffoldError};
use crate::templates::{COMPONENT_UNIT, OBJECT_UNIT, SCENE_UNIT};

/// Directory whose presence marks a scaffolded project
pub const PROJECT_MARKER: &str = "src/scenes";

/// Kind of source stub `playkit add` writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UnitKind {
    /// Scene module under `src/scenes`
    Scene,
    /// Game object factory under `src/objects`
    Object,
    /// Component under `src/components`
    Component,
}

impl UnitKind {
    /// Directory the stub is written to, relative to the project root
    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Scene => "src/scenes",
            Self::Object => "src/objects",
            Self::Component => "src/components",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::Scene => SCENE_UNIT,
            Self::Object => OBJECT_UNIT,
            Self::Component => COMPONENT_UNIT,
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Scene => "scene",
            Self::Object => "object",
            Self::Component => "component",
        })
    }
}

/// Write a new `kind` stub called `name` into the project at `project_dir`
///
/// An existing file with the same name is replaced.
///
/// # Errors
///
/// Returns an error if:
/// - `project_dir` has no `src/scenes` directory (nothing is written)
/// - `name` is empty, contains a path separator, or does not camel-case into a
///   valid function name
/// - The stub cannot be rendered or written
pub fn add_unit(project_dir: &Path, kind: UnitKind, name: &str) -> Result<PathBuf> {
    if !project_dir.join(PROJECT_MARKER).is_dir() {
        return Err(ScaffoldError::NotAProject {
            path: project_dir.to_path_buf(),
        });
    }

    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(ScaffoldError::InvalidUnitName {
            name: name.to_string(),
        });
    }

    let identifier = unit_identifier(name);
    if !is_valid_identifier(&identifier) {
        return Err(ScaffoldError::InvalidUnitName {
            name: name.to_string(),
        });
    }

    let relative = format!("{}/{name}.ts", kind.directory());
    let path = resolve_within(project_dir, &relative)?;

    let context = json!({
        "name": name,
        "identifier": identifier,
    });
    let rendered = super::renderer()
        .render_template(kind.template(), &context)
        .map_err(|err| ScaffoldError::Render {
            path: relative.clone(),
            source: Box::new(err),
        })?;

    if path.exists() {
        tracing::warn!(path = %path.display(), "replacing existing {kind}");
    }
    write_file(&path, &rendered)?;
    tracing::info!(path = %path.display(), %identifier, "added {kind}");

    Ok(path)
}
