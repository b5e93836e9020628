//! Project scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use playkit_cli_lib::{GenerationOptions, PlaykitConfig, ProjectMaterializer, TemplateName};

use super::ConsoleReporter;

/// Create a new playkit project
pub struct InitCommand {
    dir: String,
    root: PathBuf,
    options: GenerationOptions,
}

impl InitCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `dir` - Target directory, relative to the current directory
    /// * `force` - Remove the directory first if it exists
    /// * `nogit` - Skip repository initialization
    /// * `template` - Template to use, or the configured default
    pub fn new(
        dir: String,
        force: bool,
        nogit: bool,
        template: Option<TemplateName>,
        config: &PlaykitConfig,
    ) -> Result<Self> {
        let root = std::env::current_dir()
            .context("Failed to read current directory")?
            .join(&dir);

        let options = GenerationOptions {
            force,
            template: template.unwrap_or(config.project.default_template),
            nogit: nogit || !config.project.init_git,
        };

        Ok(Self { dir, root, options })
    }

    /// Execute the command
    pub fn execute(&self, config: &PlaykitConfig) -> Result<()> {
        println!(
            "{} {} {} {}",
            style("Creating").green().bold(),
            style("playkit project:").bold(),
            style(&self.dir).cyan().bold(),
            style(format!("({} template)", self.options.template)).dim()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Generating project files...");

        let materializer = ProjectMaterializer::from_config(config)
            .with_reporter(ConsoleReporter::new(spinner.clone()));
        let result = materializer.init_project(&self.root, &self.options);

        spinner.finish_and_clear();

        let report = result
            .with_context(|| format!("Failed to create project in {}", self.root.display()))?;
        tracing::info!(
            files = report.created.len(),
            git = report.repository_initialized,
            "project created"
        );

        self.print_success(report.repository_initialized);

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self, repository_initialized: bool) {
        println!();
        println!("{}", style("✓ Project created successfully!").green().bold());
        if repository_initialized {
            println!("  {}", style("Initialized an empty git repository").dim());
        }
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style(format!("cd {}", self.dir)).cyan());
        println!();
        println!("  {} Install dependencies:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style("npm install").cyan());
        println!();
        println!("  {} Start development server:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style("npm run dev").cyan());
        println!();
        println!("  {} Open in browser:", style("4.").cyan());
        println!("     {}", style("http://localhost:8000").cyan().underlined());
        println!();
        println!("{}", style("Have fun making games! 🎮").green().bold());
    }
}
