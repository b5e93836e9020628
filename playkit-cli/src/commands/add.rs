//! Add a scene, object or component to the current project

use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

use playkit_cli_lib::{add_unit, UnitKind};

use super::SUCCESS;

/// Write one stub into the project in the current directory
pub struct AddCommand {
    kind: UnitKind,
    name: String,
    project_dir: PathBuf,
}

impl AddCommand {
    /// Create a new command instance for the current directory
    pub fn new(kind: UnitKind, name: String) -> Result<Self> {
        let project_dir = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self {
            kind,
            name,
            project_dir,
        })
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let path = add_unit(&self.project_dir, self.kind, &self.name)?;
        let shown = path.strip_prefix(&self.project_dir).unwrap_or(&path);

        println!(
            "  {} Created {}: {}",
            style(SUCCESS).green(),
            self.kind,
            style(shown.display()).cyan()
        );

        Ok(())
    }
}
