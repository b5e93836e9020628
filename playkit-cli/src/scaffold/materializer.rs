//! Project materializer
//!
//! Turns a project root, a template and [`GenerationOptions`] into files on disk:
//!
//! 1. Refuse (or with `force`, wipe) an existing root
//! 2. Create the root and the public assets directory
//! 3. Expand the template entries
//! 4. Write the auxiliary files every project gets
//! 5. Unless `nogit`, write `.gitignore` and initialize a repository
//!
//! Nothing is rolled back on failure; whatever was written stays on disk.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;

use super::fs::{ensure_dir, remove_all, resolve_within, write_file};
use super::naming::{display_title, package_name};
use crate::config::PlaykitConfig;
use crate::error::{Result, ScaffoldError};
use crate::report::{NullReporter, Reporter};
use crate::templates::{
    auxiliary_entries, gitignore_entry, Payload, ProjectContext, TemplateEntry, TemplateName,
};
use crate::vcs::{GitCli, RepositoryInitializer};

/// Package name used when the root's base name is not a valid package name
pub const DEFAULT_FALLBACK_PACKAGE_NAME: &str = "playkit-game";

/// Framework version requirement written to `package.json`
pub const DEFAULT_FRAMEWORK_VERSION: &str = "^1.0.0";

/// Options recognized by `init`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Remove an existing root before generating
    pub force: bool,
    /// Template to expand
    pub template: TemplateName,
    /// Skip `.gitignore` and repository initialization
    pub nogit: bool,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Project root
    pub root: PathBuf,
    /// Directories and files created from entries, in creation order
    pub created: Vec<PathBuf>,
    /// Whether a repository was initialized
    pub repository_initialized: bool,
}

/// Materializes projects from the template registry
pub struct ProjectMaterializer {
    handlebars: Handlebars<'static>,
    fallback_package_name: String,
    framework_version: String,
    repository: Box<dyn RepositoryInitializer>,
    reporter: Box<dyn Reporter>,
}

impl ProjectMaterializer {
    /// Create a materializer with built-in defaults, `git` on `PATH` and no reporting
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: super::renderer(),
            fallback_package_name: DEFAULT_FALLBACK_PACKAGE_NAME.to_string(),
            framework_version: DEFAULT_FRAMEWORK_VERSION.to_string(),
            repository: Box::new(GitCli::default()),
            reporter: Box::new(NullReporter),
        }
    }

    /// Create a materializer from loaded configuration
    #[must_use]
    pub fn from_config(config: &PlaykitConfig) -> Self {
        Self::new()
            .with_fallback_package_name(&config.project.fallback_package_name)
            .with_framework_version(&config.project.framework_version)
            .with_repository(GitCli::new(&config.git.program))
    }

    /// Override the fallback package name
    #[must_use]
    pub fn with_fallback_package_name(mut self, name: &str) -> Self {
        self.fallback_package_name = name.to_string();
        self
    }

    /// Override the framework version requirement
    #[must_use]
    pub fn with_framework_version(mut self, version: &str) -> Self {
        self.framework_version = version.to_string();
        self
    }

    /// Use a different repository initializer
    #[must_use]
    pub fn with_repository(mut self, repository: impl RepositoryInitializer + 'static) -> Self {
        self.repository = Box::new(repository);
        self
    }

    /// Send progress to `reporter`
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Values the payloads of a project at `root` are rendered against
    #[must_use]
    pub fn context(&self, root: &Path) -> ProjectContext {
        let project_name = root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.fallback_package_name.as_str())
            .to_string();

        ProjectContext {
            package_name: package_name(&project_name, &self.fallback_package_name),
            title: display_title(&project_name),
            framework_version: self.framework_version.clone(),
            project_name,
        }
    }

    /// Materialize a project at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `root` exists and `options.force` is not set (nothing is written)
    /// - Removing the existing root fails
    /// - A directory or file cannot be written
    /// - A template fails to render or serialize
    /// - Repository initialization fails (written files stay on disk)
    pub fn init_project(
        &self,
        root: &Path,
        options: &GenerationOptions,
    ) -> Result<MaterializeReport> {
        if root.exists() {
            if !options.force {
                return Err(ScaffoldError::AlreadyExists {
                    path: root.to_path_buf(),
                });
            }
            tracing::info!(root = %root.display(), "removing existing project root");
            remove_all(root)?;
        }

        let context = self.context(root);
        tracing::info!(
            root = %root.display(),
            template = %options.template,
            package = %context.package_name,
            "materializing project"
        );

        ensure_dir(root)?;
        ensure_dir(&root.join("public"))?;

        let mut report = MaterializeReport {
            root: root.to_path_buf(),
            created: Vec::new(),
            repository_initialized: false,
        };

        for entry in options.template.entries() {
            self.materialize(root, &entry, &context, &mut report)?;
        }

        for entry in auxiliary_entries(&context) {
            self.materialize(root, &entry, &context, &mut report)?;
        }

        if !options.nogit {
            self.materialize(root, &gitignore_entry(), &context, &mut report)?;
            self.repository.init(root, self.reporter.as_ref())?;
            report.repository_initialized = true;
        }

        Ok(report)
    }

    /// Write a single entry below `root`
    fn materialize(
        &self,
        root: &Path,
        entry: &TemplateEntry,
        context: &ProjectContext,
        report: &mut MaterializeReport,
    ) -> Result<()> {
        let path = resolve_within(root, entry.path)?;

        match &entry.payload {
            Payload::Directory => ensure_dir(&path)?,
            Payload::Text(template) => {
                let rendered = self
                    .handlebars
                    .render_template(template, context)
                    .map_err(|err| ScaffoldError::Render {
                        path: entry.path.to_string(),
                        source: Box::new(err),
                    })?;
                write_file(&path, &rendered)?;
            }
            Payload::Structured(value) => {
                let mut serialized =
                    serde_json::to_string_pretty(value).map_err(|err| ScaffoldError::Serialize {
                        path: entry.path.to_string(),
                        source: err,
                    })?;
                serialized.push('\n');
                write_file(&path, &serialized)?;
            }
        }

        tracing::debug!(path = %path.display(), "created");
        self.reporter.created(entry.path, &path);
        report.created.push(path);
        Ok(())
    }
}

impl Default for ProjectMaterializer {
    fn default() -> Self {
        Self::new()
    }
}
