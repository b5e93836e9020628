//! Error types for project scaffolding

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while materializing a project or adding a unit to one
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Target root already exists and `--force` was not given
    #[error("Directory '{}' already exists. Re-run with --force to overwrite it.", path.display())]
    AlreadyExists {
        /// The existing root
        path: PathBuf,
    },

    /// `add` was invoked outside a scaffolded project
    #[error(
        "No src/scenes directory found in '{}'. Run this command inside a playkit project.",
        path.display()
    )]
    NotAProject {
        /// Directory that was inspected
        path: PathBuf,
    },

    /// Unit name cannot be turned into a file name
    #[error("Invalid name: '{name}'")]
    InvalidUnitName {
        /// Offending name
        name: String,
    },

    /// A relative path would resolve outside the project root
    #[error("Path '{path}' escapes the project root")]
    PathEscapesRoot {
        /// Offending relative path
        path: String,
    },

    /// Filesystem failure
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        /// Path being created, written or removed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Template rendering failure
    #[error("Failed to render template for '{path}': {source}")]
    Render {
        /// Relative path of the file being rendered
        path: String,
        /// Underlying error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Structured payload serialization failure
    #[error("Failed to serialize '{path}': {source}")]
    Serialize {
        /// Relative path of the file being serialized
        path: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The version-control command could not be spawned or exited non-zero
    #[error("{program} init failed: {reason}")]
    VersionControl {
        /// Program that was invoked
        program: String,
        /// Spawn error or exit status
        reason: String,
    },
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
