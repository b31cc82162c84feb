//! Intermediate model of a parsed style sheet.
//!
//! Produced by a [`crate::parser::StyleSheetParser`] and consumed read-only by every
//! checker. Every entity carries the [`Location`] it was parsed from.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Position of an entity in its source file (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Location of the first character of a file, used for file-level findings.
    #[must_use]
    pub fn file_start(file: &Path) -> Self {
        Self::new(file, 1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file.to_string_lossy().replace('\\', "/"),
            self.line,
            self.column
        )
    }
}

/// Semantic category of a custom property, inferred from its name and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    Color,
    Spacing,
    Font,
    Radius,
    Duration,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssVariable {
    /// Full name including the leading `--`.
    pub name: String,
    pub value: String,
    pub category: VariableCategory,
    /// Selector the variable was declared in, prefixed with the enclosing
    /// `@media` prelude when there is one (e.g. `@media (prefers-color-scheme: dark) :root`).
    pub scope: String,
    pub location: Location,
}

impl CssVariable {
    /// Whether the declaration lives in a dark-mode override block.
    #[must_use]
    pub fn is_dark_mode_override(&self) -> bool {
        is_dark_mode_context(&self.scope)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Component,
    Utility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssProperty {
    pub name: String,
    pub value: String,
    pub location: Location,
}

impl CssProperty {
    #[must_use]
    pub fn is_important(&self) -> bool {
        self.value.to_ascii_lowercase().contains("!important")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssClass {
    /// Class name without the leading dot.
    pub name: String,
    pub kind: ClassKind,
    /// Full selector the class was declared with.
    pub selector: String,
    pub properties: Vec<CssProperty>,
    /// Enclosing `@media` prelude, if any.
    pub media: Option<String>,
    pub location: Location,
}

impl CssClass {
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&CssProperty> {
        self.properties
            .iter()
            .rev()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssSelector {
    pub text: String,
    pub properties: Vec<CssProperty>,
    pub media: Option<String>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQuery {
    /// Prelude after `@media`, e.g. `(max-width: 768px)`.
    pub query: String,
    /// Raw text between the braces.
    pub content: String,
    pub location: Location,
}

impl MediaQuery {
    #[must_use]
    pub fn normalized_query(&self) -> String {
        normalize_query(&self.query)
    }

    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.normalized_query().contains("prefers-color-scheme:dark")
    }

    #[must_use]
    pub fn is_reduced_motion(&self) -> bool {
        self.normalized_query()
            .contains("prefers-reduced-motion:reduce")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssAnimation {
    pub name: String,
    pub location: Location,
}

/// Everything the checkers know about one style sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub path: PathBuf,
    pub variables: Vec<CssVariable>,
    pub classes: Vec<CssClass>,
    pub selectors: Vec<CssSelector>,
    pub media_queries: Vec<MediaQuery>,
    pub animations: Vec<CssAnimation>,
}

impl StyleSheet {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn color_variables(&self) -> impl Iterator<Item = &CssVariable> {
        self.variables
            .iter()
            .filter(|v| v.category == VariableCategory::Color)
    }
}

/// Lowercase and strip all whitespace so `( prefers-color-scheme : dark )` compares equal
/// to `(prefers-color-scheme:dark)`.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a selector or scope string names a dark-mode context.
#[must_use]
pub fn is_dark_mode_context(text: &str) -> bool {
    let normalized = normalize_query(text).replace('\'', "\"");
    normalized.contains("prefers-color-scheme:dark")
        || normalized.contains(".dark-mode")
        || normalized.contains("[data-theme=\"dark\"]")
        || normalized.contains("[data-theme=dark]")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
