//! Aggregate views over the issues of one audit run.

mod detailed;
mod fix_plan;
mod recommend;
mod summary;

pub use detailed::{GroupBy, IssueGroup, group_issues};
pub use fix_plan::{FixPlan, FixTask, format_minutes};
pub use recommend::recommendations;
pub use summary::Summary;

use indexmap::IndexMap;
use serde::Serialize;

use crate::collector::IssueCollector;
use crate::issue::{Category, Issue, Severity};

/// The aggregated result of an audit.
///
/// The three `issues_by_*` maps partition the same issue set.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub summary: Summary,
    pub issues_by_category: IndexMap<Category, Vec<Issue>>,
    pub issues_by_severity: IndexMap<Severity, Vec<Issue>>,
    pub issues_by_file: IndexMap<String, Vec<Issue>>,
    pub recommendations: Vec<String>,
}

impl AuditReport {
    #[must_use]
    pub fn new(collector: &IssueCollector, files_scanned: usize) -> Self {
        Self {
            summary: Summary::new(collector, files_scanned),
            issues_by_category: owned(collector.by_category()),
            issues_by_severity: owned(collector.by_severity()),
            issues_by_file: owned(collector.by_file()),
            recommendations: recommendations(collector),
        }
    }

    /// Every issue, in file order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues_by_file.values().flatten()
    }
}

fn owned<K: std::hash::Hash + Eq>(groups: IndexMap<K, Vec<&Issue>>) -> IndexMap<K, Vec<Issue>> {
    groups
        .into_iter()
        .map(|(key, issues)| (key, issues.into_iter().cloned().collect()))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
