//! Naming rules for generated projects and units

use convert_case::{Case, Casing};
use once_cell::sync::Lazy;
use regex::Regex;

/// npm package name, optionally scoped
static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(@[a-z0-9-~][a-z0-9-._~]*/)?[a-z0-9-~][a-z0-9-._~]*$")
        .expect("Invalid regex")
});

/// Identifier usable as a TypeScript function name
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid regex"));

/// Words that cannot name a function declaration
const RESERVED_WORDS: &str = "
    arguments await break case catch class const continue debugger default delete do else enum
    eval export extends false finally for function if implements import in instanceof interface
    let new null package private protected public return static super switch this throw true
    try typeof var void while with yield
";

/// Whether `identifier` can be emitted as `export default function <identifier>`
#[must_use]
pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER.is_match(identifier)
        && !RESERVED_WORDS.split_whitespace().any(|word| word == identifier)
}

/// Whether `name` can be used verbatim as a package name
#[must_use]
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Package name for a project root base name, or `fallback` when it is not a valid one
#[must_use]
pub fn package_name(base_name: &str, fallback: &str) -> String {
    if is_valid_package_name(base_name) {
        base_name.to_string()
    } else {
        fallback.to_string()
    }
}

/// Title shown in the HTML shell and the web manifest
///
/// ```
/// # use playkit_cli_lib::scaffold::naming::display_title;
/// assert_eq!(display_title("space-invaders"), "Space Invaders");
/// ```
#[must_use]
pub fn display_title(project_name: &str) -> String {
    project_name.to_case(Case::Title)
}

/// Identifier exported by a unit stub
///
/// Every `-` followed by a letter, digit or `_` is dropped and the following
/// character upper-cased. Anything else is kept as is.
///
/// ```
/// # use playkit_cli_lib::scaffold::naming::unit_identifier;
/// assert_eq!(unit_identifier("boss-fight"), "bossFight");
/// ```
#[must_use]
pub fn unit_identifier(name: &str) -> String {
    let mut identifier = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && (next.is_ascii_alphanumeric() || next == '_') => {
                identifier.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => identifier.push(c),
        }
    }

    identifier
}
