//! Configuration for the playkit CLI
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `PLAYKIT_` prefix, `__` for nesting)
//! 2. `./playkit.toml`
//! 3. `~/.config/playkit/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [project]
//! default_template = "empty"
//! init_git = false
//! fallback_package_name = "my-game"
//! framework_version = "^1.2.0"
//!
//! [git]
//! program = "/usr/local/bin/git"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::scaffold::materializer::{DEFAULT_FALLBACK_PACKAGE_NAME, DEFAULT_FRAMEWORK_VERSION};
use crate::templates::TemplateName;

/// Defaults for newly generated projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Template used when `--template` is not given
    pub default_template: TemplateName,

    /// Initialize a repository unless `--nogit` is given
    pub init_git: bool,

    /// Package name used when the directory name is not a valid one
    pub fallback_package_name: String,

    /// Version requirement for the framework dependency
    pub framework_version: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            default_template: TemplateName::default(),
            init_git: true,
            fallback_package_name: DEFAULT_FALLBACK_PACKAGE_NAME.to_string(),
            framework_version: DEFAULT_FRAMEWORK_VERSION.to_string(),
        }
    }
}

/// Version-control settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Program run as `<program> init`
    pub program: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

/// Complete CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaykitConfig {
    /// Project defaults
    pub project: ProjectSettings,

    /// Version control
    pub git: GitSettings,
}

impl PlaykitConfig {
    /// Load configuration from the user config, `./playkit.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - Configuration values fail type conversion
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(Self::recommended_path().as_deref(), Path::new("playkit.toml"))
    }

    /// Load configuration from explicit user and local files plus the environment
    ///
    /// Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value has
    /// the wrong type.
    pub fn load_with(user_config: Option<&Path>, local_config: &Path) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 4. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 3. User config: ~/.config/playkit/config.toml
        if let Some(user_config) = user_config.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(user_config));
        }

        // 2. Local config: ./playkit.toml
        if local_config.exists() {
            figment = figment.merge(Toml::file(local_config));
        }

        // 1. Environment variables (highest priority, double underscore for nesting)
        figment = figment.merge(Env::prefixed("PLAYKIT_").split("__").lowercase(true));

        let config = figment.extract()?;
        Ok(config)
    }

    /// XDG config path, `~/.config/playkit/config.toml` on Linux
    #[must_use]
    pub fn recommended_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("playkit").join("config.toml"))
    }
}
