//! Style checkers.
//!
//! Each checker is a pure function of one parsed sheet (plus its raw text) to a list of
//! issues. Checkers share no state, so the orchestrator may run them in any order or on
//! any thread.

mod animation;
mod color;
mod comments;
pub mod contrast;
pub mod lexical;
mod naming;
mod organization;
mod quality;
mod responsive;
mod spacing;
pub mod tables;

pub use animation::AnimationChecker;
pub use color::ColorChecker;
pub use comments::CommentsChecker;
pub use naming::NamingChecker;
pub use quality::{QualityChecker, specificity};
pub use responsive::ResponsiveChecker;
pub use spacing::SpacingChecker;

use std::collections::HashSet;

use crate::config::AuditConfig;
use crate::issue::Issue;
use crate::model::{CssProperty, CssSelector, StyleSheet};

pub trait Checker: Send + Sync {
    /// Stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Analyse one sheet. `raw` is the unparsed source, when available.
    fn check(&self, sheet: &StyleSheet, raw: Option<&str>) -> Vec<Issue>;
}

/// The fixed list of checkers run on every file.
pub struct CheckerSet {
    checkers: Vec<Box<dyn Checker>>,
}

impl CheckerSet {
    #[must_use]
    pub fn standard(config: &AuditConfig) -> Self {
        Self {
            checkers: vec![
                Box::new(NamingChecker::new(&config.naming)),
                Box::new(ColorChecker::new(&config.color)),
                Box::new(SpacingChecker),
                Box::new(AnimationChecker),
                Box::new(ResponsiveChecker::new(&config.responsive)),
                Box::new(QualityChecker::new(&config.quality)),
                Box::new(CommentsChecker::new(&config.comments)),
            ],
        }
    }

    #[must_use]
    pub fn from_checkers(checkers: Vec<Box<dyn Checker>>) -> Self {
        Self { checkers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Checker> {
        self.checkers.iter().map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Run every checker on one sheet, concatenating issues in checker order.
    #[must_use]
    pub fn run(&self, sheet: &StyleSheet, raw: Option<&str>) -> Vec<Issue> {
        self.iter().flat_map(|c| c.check(sheet, raw)).collect()
    }
}

/// Every declaration once, with the first selector it was written for.
///
/// A rule with a selector list shares its declarations between all selectors; this
/// yields each source declaration a single time.
pub(crate) fn declarations(sheet: &StyleSheet) -> Vec<(&CssSelector, &CssProperty)> {
    let mut seen = HashSet::new();
    sheet
        .selectors
        .iter()
        .flat_map(|selector| selector.properties.iter().map(move |p| (selector, p)))
        .filter(|(_, p)| seen.insert((p.location.line, p.location.column)))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
