//! Project template registry
//!
//! Every template is a flat, ordered list of [`TemplateEntry`] values. Paths are
//! relative to the project root and payloads are either a bare directory, a
//! handlebars text template, or a JSON value rendered by the materializer.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub mod files;
pub mod units;

pub use files::*;
pub use units::{COMPONENT_UNIT, OBJECT_UNIT, SCENE_UNIT};

/// Named project templates
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateName {
    /// Bare project with a single main scene
    Empty,
    /// Small playable game with a player, an enemy and three scenes (default)
    #[default]
    Basic,
}

impl TemplateName {
    /// All registered templates, in display order
    pub const ALL: [Self; 2] = [Self::Empty, Self::Basic];

    /// Name as accepted on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Basic => "basic",
        }
    }

    /// One-line summary shown by `playkit templates`
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Empty => "Bare project with a single main scene",
            Self::Basic => "Small playable game with a player, an enemy and three scenes",
        }
    }

    /// Entries this template materializes
    #[must_use]
    pub fn entries(self) -> Vec<TemplateEntry> {
        match self {
            Self::Empty => vec![
                TemplateEntry::directory("assets"),
                TemplateEntry::directory("src/components"),
                TemplateEntry::directory("src/objects"),
                TemplateEntry::text("src/scenes/main.ts", EMPTY_MAIN_SCENE),
            ],
            Self::Basic => vec![
                TemplateEntry::directory("assets"),
                TemplateEntry::directory("src/components"),
                TemplateEntry::text("src/objects/player.ts", BASIC_PLAYER),
                TemplateEntry::text("src/objects/enemy.ts", BASIC_ENEMY),
                TemplateEntry::text("src/scenes/main.ts", BASIC_MAIN_SCENE),
                TemplateEntry::text("src/scenes/game.ts", BASIC_GAME_SCENE),
                TemplateEntry::text("src/scenes/gameover.ts", BASIC_GAMEOVER_SCENE),
            ],
        }
    }
}

impl std::fmt::Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What gets written at a template path
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Create the directory only
    Directory,
    /// Handlebars template rendered against the project context
    Text(&'static str),
    /// JSON document, written pretty-printed
    Structured(Value),
}

/// A single path in a template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    /// Path relative to the project root, `/`-separated
    pub path: &'static str,
    /// Content kind
    pub payload: Payload,
}

impl TemplateEntry {
    /// Directory-only entry
    #[must_use]
    pub const fn directory(path: &'static str) -> Self {
        Self {
            path,
            payload: Payload::Directory,
        }
    }

    /// Text file entry
    #[must_use]
    pub const fn text(path: &'static str, template: &'static str) -> Self {
        Self {
            path,
            payload: Payload::Text(template),
        }
    }

    /// Structured (JSON) file entry
    #[must_use]
    pub const fn structured(path: &'static str, value: Value) -> Self {
        Self {
            path,
            payload: Payload::Structured(value),
        }
    }
}

/// Values every payload is rendered against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectContext {
    /// Base name of the project root
    pub project_name: String,
    /// Name declared in `package.json`
    pub package_name: String,
    /// Human readable title used in the HTML shell and the manifest
    pub title: String,
    /// Version requirement for the framework dependency
    pub framework_version: String,
}

/// Files written for every project regardless of template
#[must_use]
pub fn auxiliary_entries(context: &ProjectContext) -> Vec<TemplateEntry> {
    vec![
        TemplateEntry::structured("public/manifest.json", web_manifest(context)),
        TemplateEntry::text("index.html", INDEX_HTML),
        TemplateEntry::text("src/main.ts", MAIN_TS),
        TemplateEntry::text("src/constants.ts", CONSTANTS_TS),
        TemplateEntry::structured(".prettierrc", prettier_config()),
        TemplateEntry::structured("tsconfig.json", tsconfig()),
        TemplateEntry::text("vite.config.ts", VITE_CONFIG_TS),
        TemplateEntry::structured("package.json", package_json(context)),
    ]
}

/// Ignore file written when a repository is initialized
#[must_use]
pub const fn gitignore_entry() -> TemplateEntry {
    TemplateEntry::text(".gitignore", GITIGNORE)
}

fn web_manifest(context: &ProjectContext) -> Value {
    json!({
        "name": context.title,
        "short_name": context.project_name,
        "start_url": "/",
        "display": "fullscreen",
        "orientation": "landscape",
        "background_color": "#141414",
        "theme_color": "#141414",
        "icons": [],
    })
}

fn prettier_config() -> Value {
    json!({
        "semi": true,
        "singleQuote": false,
        "tabWidth": 4,
        "trailingComma": "all",
        "printWidth": 100,
    })
}

fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "lib": ["ES2022", "DOM", "DOM.Iterable"],
            "types": ["vite/client"],
            "strict": true,
            "noEmit": true,
            "isolatedModules": true,
            "skipLibCheck": true,
        },
        "include": ["src"],
    })
}

fn package_json(context: &ProjectContext) -> Value {
    json!({
        "name": context.package_name,
        "version": "0.1.0",
        "private": true,
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "tsc && vite build",
            "preview": "vite preview",
            "format": "prettier --write src",
        },
        "dependencies": {
            "playkit": context.framework_version,
        },
        "devDependencies": {
            "prettier": "^3.3.0",
            "typescript": "^5.5.0",
            "vite": "^5.4.0",
        },
    })
}
