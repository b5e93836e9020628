//! playkit CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{AddCommand, InitCommand, TemplatesCommand};
use playkit_cli_lib::{observability, PlaykitConfig, TemplateName, UnitKind};

#[derive(Debug, Parser)]
#[command(name = "playkit")]
#[command(version)]
#[command(about = "Scaffold projects for the playkit game framework", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a new playkit project
    Init {
        /// Directory to create the project in
        dir: String,
        /// Overwrite the directory if it already exists
        #[arg(short, long)]
        force: bool,
        /// Skip git repository initialization
        #[arg(short = 'g', long)]
        nogit: bool,
        /// Project template
        #[arg(short, long, value_enum)]
        template: Option<TemplateName>,
    },
    /// Add a scene, object or component to the current project
    Add {
        /// What to add
        #[arg(value_enum, value_name = "TYPE")]
        kind: UnitKind,
        /// File name, e.g. `boss-fight`
        name: String,
    },
    /// List available project templates
    Templates,
}

/// Usage errors exit with 1; help and version exit with 0
fn exit_code(err: &clap::Error) -> i32 {
    i32::from(err.use_stderr())
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_code(&err));
        }
    };

    observability::init(cli.verbose)?;
    let config = PlaykitConfig::load()?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Init {
            dir,
            force,
            nogit,
            template,
        } => {
            let cmd = InitCommand::new(dir, force, nogit, template, &config)?;
            cmd.execute(&config)?;
        }
        Commands::Add { kind, name } => {
            let cmd = AddCommand::new(kind, name)?;
            cmd.execute()?;
        }
        Commands::Templates => {
            TemplatesCommand::execute(&config);
        }
    }

    Ok(())
}
