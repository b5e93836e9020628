//! Progress reporting seam between the materializer and the terminal

use std::path::Path;

/// Receives progress while a project is materialized
pub trait Reporter {
    /// A directory or file was created; `relative` is `/`-separated from the root
    fn created(&self, relative: &str, path: &Path);

    /// A line of output from an external command
    fn relay(&self, line: &str);
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn created(&self, _relative: &str, _path: &Path) {}

    fn relay(&self, _line: &str) {}
}
