//! playkit CLI library
//!
//! Scaffolds projects for the playkit game framework from a small set of
//! built-in templates and adds scene, object and component stubs to them.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod report;
pub mod scaffold;
pub mod templates;
pub mod vcs;

pub use config::PlaykitConfig;
pub use error::ScaffoldError;
pub use scaffold::{add_unit, GenerationOptions, MaterializeReport, ProjectMaterializer, UnitKind};
pub use templates::{TemplateEntry, TemplateName};
