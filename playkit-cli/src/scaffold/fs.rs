//! Filesystem helpers confined to a project root

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Resolve a `/`-separated relative path against `root`
///
/// Only plain path segments (and `.`) are accepted, so the result is always a
/// descendant of `root`.
///
/// # Errors
///
/// Returns [`ScaffoldError::PathEscapesRoot`] for empty, absolute or `..` paths.
pub fn resolve_within(root: &Path, relative: &str) -> Result<PathBuf> {
    let escapes = || ScaffoldError::PathEscapesRoot {
        path: relative.to_string(),
    };

    let mut resolved = root.to_path_buf();
    let mut segments = 0;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                segments += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(escapes())
            }
        }
    }

    if segments == 0 {
        return Err(escapes());
    }
    Ok(resolved)
}

/// Create `path` and any missing ancestors; existing directories are left alone
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if a directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|err| ScaffoldError::io(path, err))
}

/// Write `contents` to `path`, creating parent directories and replacing any existing file
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if the parent chain or the file cannot be written.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).map_err(|err| ScaffoldError::io(path, err))
}

/// Remove whatever is at `path`, recursively for directories
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if the removal fails.
pub fn remove_all(path: &Path) -> Result<()> {
    let removed = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|err| ScaffoldError::io(path, err))
}
