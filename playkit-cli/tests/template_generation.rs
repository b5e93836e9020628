//! Integration tests for project generation

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use playkit_cli_lib::report::Reporter;
use playkit_cli_lib::templates::{auxiliary_entries, gitignore_entry, Payload};
use playkit_cli_lib::vcs::RepositoryInitializer;
use playkit_cli_lib::{
    add_unit, GenerationOptions, ProjectMaterializer, ScaffoldError, TemplateName, UnitKind,
};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Records every repository initialization instead of running git
#[derive(Clone, Default)]
struct RecordingRepository {
    roots: Rc<RefCell<Vec<PathBuf>>>,
    fail: bool,
}

impl RepositoryInitializer for RecordingRepository {
    fn init(&self, root: &Path, reporter: &dyn Reporter) -> playkit_cli_lib::error::Result<()> {
        self.roots.borrow_mut().push(root.to_path_buf());
        reporter.relay("Initialized empty repository");
        if self.fail {
            return Err(ScaffoldError::VersionControl {
                program: "git".to_string(),
                reason: "exit status: 128".to_string(),
            });
        }
        Ok(())
    }
}

/// Records reported paths and relayed lines
#[derive(Clone, Default)]
struct RecordingReporter {
    created: Rc<RefCell<Vec<String>>>,
    relayed: Rc<RefCell<Vec<String>>>,
}

impl Reporter for RecordingReporter {
    fn created(&self, relative: &str, _path: &Path) {
        self.created.borrow_mut().push(relative.to_string());
    }

    fn relay(&self, line: &str) {
        self.relayed.borrow_mut().push(line.to_string());
    }
}

fn options(template: TemplateName) -> GenerationOptions {
    GenerationOptions {
        force: false,
        template,
        nogit: true,
    }
}

/// Every file and directory below `root`, relative and `/`-separated
fn tree(root: &Path) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut files = BTreeSet::new();
    let mut dirs = BTreeSet::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if entry.file_type().is_dir() {
            dirs.insert(relative);
        } else {
            files.insert(relative);
        }
    }

    (files, dirs)
}

/// Files and leaf directories a template is expected to produce
fn expected(root: &Path, template: TemplateName) -> (BTreeSet<String>, BTreeSet<String>) {
    let context = ProjectMaterializer::new().context(root);
    let mut files = BTreeSet::new();
    let mut dirs = BTreeSet::new();

    for entry in template.entries().into_iter().chain(auxiliary_entries(&context)) {
        match entry.payload {
            Payload::Directory => {
                dirs.insert(entry.path.to_string());
            }
            Payload::Text(_) | Payload::Structured(_) => {
                files.insert(entry.path.to_string());
            }
        }
    }

    // Parent directories of every entry
    let parents: Vec<String> = files
        .iter()
        .chain(dirs.iter())
        .flat_map(|path| {
            let segments: Vec<&str> = path.split('/').collect();
            (1..segments.len())
                .map(|n| segments[..n].join("/"))
                .collect::<Vec<_>>()
        })
        .collect();
    dirs.extend(parents);

    (files, dirs)
}

/// Test that every template produces exactly its entries plus the auxiliary files
#[test]
fn test_generated_tree_matches_registry() {
    for template in TemplateName::ALL {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("my-game");

        ProjectMaterializer::new()
            .init_project(&root, &options(template))
            .unwrap();

        assert_eq!(tree(&root), expected(&root, template), "template {template}");
    }
}

/// Test that the basic template ships object stubs and the empty one does not
#[test]
fn test_object_stubs_per_template() {
    let temp_dir = TempDir::new().unwrap();
    let basic = temp_dir.path().join("basic");
    let empty = temp_dir.path().join("empty");
    let materializer = ProjectMaterializer::new();

    materializer
        .init_project(&basic, &options(TemplateName::Basic))
        .unwrap();
    materializer
        .init_project(&empty, &options(TemplateName::Empty))
        .unwrap();

    assert!(basic.join("src/objects/player.ts").is_file());
    assert!(basic.join("src/scenes/gameover.ts").is_file());
    assert!(empty.join("src/objects").is_dir());
    assert_eq!(fs::read_dir(empty.join("src/objects")).unwrap().count(), 0);
}

/// Test that the project name reaches the rendered files
#[test]
fn test_project_name_is_rendered() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("space-shooter");

    ProjectMaterializer::new()
        .init_project(&root, &options(TemplateName::Empty))
        .unwrap();

    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(html.contains("<title>Space Shooter</title>"));

    let constants = fs::read_to_string(root.join("src/constants.ts")).unwrap();
    assert!(constants.contains("GAME_TITLE = \"Space Shooter\""));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("public/manifest.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["name"], "Space Shooter");
    assert_eq!(manifest["short_name"], "space-shooter");
}

/// Test that quotes and markup in the directory name stay inside string literals
#[test]
fn test_title_is_escaped_in_generated_sources() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("say \"hi\" <game>");
    let materializer = ProjectMaterializer::new();

    materializer
        .init_project(&root, &options(TemplateName::Empty))
        .unwrap();
    let title = materializer.context(&root).title;

    let constants = fs::read_to_string(root.join("src/constants.ts")).unwrap();
    let literal = constants
        .lines()
        .find_map(|line| line.strip_prefix("export const GAME_TITLE = "))
        .and_then(|rest| rest.strip_suffix(';'))
        .unwrap();
    assert_eq!(serde_json::from_str::<String>(literal).unwrap(), title);

    let scene = fs::read_to_string(root.join("src/scenes/main.ts")).unwrap();
    assert!(scene.contains(&format!("game.text({})", serde_json::to_string(&title).unwrap())));

    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(!html.contains("<game>"));
    assert!(html.contains(&format!("<title>{}</title>", handlebars::html_escape(&title))));
}

/// Test that invalid directory names fall back to the configured package name
#[test]
fn test_package_name_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let materializer = ProjectMaterializer::new().with_fallback_package_name("fallback-game");

    let cases = [("My Game", "fallback-game"), ("my-game", "my-game"), ("my.game_2", "my.game_2")];
    for (dir, expected) in cases {
        let root = temp_dir.path().join(dir);
        materializer
            .init_project(&root, &options(TemplateName::Empty))
            .unwrap();

        let package: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
        assert_eq!(package["name"], expected, "directory {dir}");
    }
}

/// Test that an existing root is refused without force and replaced with it
#[test]
fn test_force_semantics() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("game");
    fs::create_dir_all(root.join("old")).unwrap();
    fs::write(root.join("old/notes.txt"), "notes").unwrap();
    let materializer = ProjectMaterializer::new();

    let err = materializer
        .init_project(&root, &options(TemplateName::Basic))
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::AlreadyExists { .. }));
    assert_eq!(fs::read_to_string(root.join("old/notes.txt")).unwrap(), "notes");
    assert!(!root.join("package.json").exists());

    let forced = GenerationOptions {
        force: true,
        ..options(TemplateName::Basic)
    };
    materializer.init_project(&root, &forced).unwrap();

    assert!(!root.join("old").exists());
    assert_eq!(tree(&root), expected(&root, TemplateName::Basic));
}

/// Test that force also replaces a plain file at the root path
#[test]
fn test_force_replaces_file_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("game");
    fs::write(&root, "not a directory").unwrap();

    let forced = GenerationOptions {
        force: true,
        ..options(TemplateName::Empty)
    };
    ProjectMaterializer::new().init_project(&root, &forced).unwrap();

    assert!(root.join("index.html").is_file());
}

/// Test that identical inputs give byte-identical output
#[test]
fn test_generation_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let first_root = first.path().join("my-game");
    let second_root = second.path().join("my-game");
    let materializer = ProjectMaterializer::new();

    materializer
        .init_project(&first_root, &options(TemplateName::Basic))
        .unwrap();
    materializer
        .init_project(&second_root, &options(TemplateName::Basic))
        .unwrap();

    let (files, _) = tree(&first_root);
    assert_eq!(tree(&first_root), tree(&second_root));
    for file in files {
        assert_eq!(
            fs::read(first_root.join(&file)).unwrap(),
            fs::read(second_root.join(&file)).unwrap(),
            "{file} differs"
        );
    }
}

/// Test that git runs once after `.gitignore` is written
#[test]
fn test_repository_initialized_unless_nogit() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("game");
    let repository = RecordingRepository::default();
    let reporter = RecordingReporter::default();
    let materializer = ProjectMaterializer::new()
        .with_repository(repository.clone())
        .with_reporter(reporter.clone());

    let report = materializer
        .init_project(
            &root,
            &GenerationOptions {
                nogit: false,
                ..options(TemplateName::Basic)
            },
        )
        .unwrap();

    assert!(report.repository_initialized);
    assert_eq!(*repository.roots.borrow(), vec![root.clone()]);
    assert!(root.join(".gitignore").is_file());
    assert_eq!(
        reporter.created.borrow().last().map(String::as_str),
        Some(gitignore_entry().path)
    );
    assert_eq!(*reporter.relayed.borrow(), vec!["Initialized empty repository"]);

    let (mut files, dirs) = expected(&root, TemplateName::Basic);
    files.insert(".gitignore".to_string());
    assert_eq!(tree(&root), (files, dirs));
}

/// Test that nogit skips both the ignore file and the repository
#[test]
fn test_nogit_skips_repository() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("game");
    let repository = RecordingRepository::default();

    let report = ProjectMaterializer::new()
        .with_repository(repository.clone())
        .init_project(&root, &options(TemplateName::Basic))
        .unwrap();

    assert!(!report.repository_initialized);
    assert!(repository.roots.borrow().is_empty());
    assert!(!root.join(".gitignore").exists());
}

/// Test that a failing repository init leaves the generated files on disk
#[test]
fn test_repository_failure_keeps_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("game");
    let repository = RecordingRepository {
        fail: true,
        ..RecordingRepository::default()
    };

    let err = ProjectMaterializer::new()
        .with_repository(repository)
        .init_project(
            &root,
            &GenerationOptions {
                nogit: false,
                ..options(TemplateName::Empty)
            },
        )
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::VersionControl { .. }));
    assert!(root.join("package.json").is_file());
    assert!(root.join(".gitignore").is_file());
}

/// Test that every entry is reported once, in creation order
#[test]
fn test_reporter_sees_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("game");
    let reporter = RecordingReporter::default();
    let materializer = ProjectMaterializer::new().with_reporter(reporter.clone());

    let report = materializer
        .init_project(&root, &options(TemplateName::Empty))
        .unwrap();

    let context = materializer.context(&root);
    let expected: Vec<String> = TemplateName::Empty
        .entries()
        .into_iter()
        .chain(auxiliary_entries(&context))
        .map(|entry| entry.path.to_string())
        .collect();
    assert_eq!(*reporter.created.borrow(), expected);
    assert_eq!(report.created.len(), expected.len());
    assert!(report.created.iter().all(|path| path.starts_with(&root)));
}

/// Test that `add` works inside a generated project
#[test]
fn test_add_scene_to_generated_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("game");
    ProjectMaterializer::new()
        .init_project(&root, &options(TemplateName::Empty))
        .unwrap();

    let path = add_unit(&root, UnitKind::Scene, "boss-fight").unwrap();

    assert_eq!(path, root.join("src/scenes/boss-fight.ts"));
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("export default function bossFight"));
}

/// Test that `add` refuses to run outside a project
#[test]
fn test_add_outside_project() {
    let temp_dir = TempDir::new().unwrap();

    let err = add_unit(temp_dir.path(), UnitKind::Scene, "boss-fight").unwrap_err();

    assert!(matches!(err, ScaffoldError::NotAProject { .. }));
    assert!(!temp_dir.path().join("src").exists());
}
