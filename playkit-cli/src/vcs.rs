//! Version-control initialization

use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, ScaffoldError};
use crate::report::Reporter;

/// Initializes a repository in a freshly generated project
pub trait RepositoryInitializer {
    /// Initialize a repository rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::VersionControl`] if the repository could not be created.
    fn init(&self, root: &Path, reporter: &dyn Reporter) -> Result<()>;
}

/// Runs `<program> init` as a child process
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    /// Use `program` instead of `git` from `PATH`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this initializer runs
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn failure(&self, reason: impl std::fmt::Display) -> ScaffoldError {
        ScaffoldError::VersionControl {
            program: self.program.clone(),
            reason: reason.to_string(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl RepositoryInitializer for GitCli {
    fn init(&self, root: &Path, reporter: &dyn Reporter) -> Result<()> {
        tracing::debug!(
            program = %self.program,
            root = %root.display(),
            "initializing repository"
        );

        let mut child = Command::new(&self.program)
            .arg("init")
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| self.failure(err))?;

        let relayed = child
            .stdout
            .take()
            .map_or(Ok(()), |stdout| relay_lines(stdout, reporter));

        // Reap the child even when its output could not be read
        let status = child.wait().map_err(|err| self.failure(err))?;
        if !status.success() {
            return Err(self.failure(status));
        }
        if let Err(err) = relayed {
            tracing::warn!(
                program = %self.program,
                error = %err,
                "could not read repository output"
            );
        }

        Ok(())
    }
}

/// Forward every line of `output` to `reporter`, replacing invalid UTF-8
fn relay_lines(output: impl Read, reporter: &dyn Reporter) -> io::Result<()> {
    let mut reader = BufReader::new(output);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        reporter.relay(line.trim_end_matches(['\r', '\n']));
    }
}
