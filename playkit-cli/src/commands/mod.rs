//! CLI command implementations

pub mod add;
pub mod init;
pub mod templates;

use std::path::Path;

use console::{style, Emoji};
use indicatif::ProgressBar;
use playkit_cli_lib::report::Reporter;

pub use add::AddCommand;
pub use init::InitCommand;
pub use templates::TemplatesCommand;

static SUCCESS: Emoji = Emoji("✓", "√");

/// Prints progress above a spinner
pub struct ConsoleReporter {
    spinner: ProgressBar,
}

impl ConsoleReporter {
    /// Report through `spinner`
    pub const fn new(spinner: ProgressBar) -> Self {
        Self { spinner }
    }
}

impl Reporter for ConsoleReporter {
    fn created(&self, relative: &str, _path: &Path) {
        self.spinner.println(format!(
            "  {} {} {}",
            style(SUCCESS).green(),
            style("created").dim(),
            relative
        ));
    }

    fn relay(&self, line: &str) {
        self.spinner.println(format!("  {}", style(line).dim()));
    }
}
