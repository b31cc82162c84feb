use indexmap::IndexMap;
use serde::Serialize;

use crate::collector::IssueCollector;
use crate::issue::{Category, Severity};

/// Headline counts. Every severity and category is present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_issues: usize,
    pub by_severity: IndexMap<Severity, usize>,
    pub by_category: IndexMap<Category, usize>,
    pub files_with_issues: usize,
    pub files_scanned: usize,
}

impl Summary {
    #[must_use]
    pub fn new(collector: &IssueCollector, files_scanned: usize) -> Self {
        Self {
            total_issues: collector.len(),
            by_severity: Severity::ALL
                .iter()
                .map(|s| (*s, collector.count_severity(*s)))
                .collect(),
            by_category: Category::ALL
                .iter()
                .map(|c| (*c, collector.count_category(*c)))
                .collect(),
            files_with_issues: collector.files_with_issues(),
            files_scanned,
        }
    }

    #[must_use]
    pub fn severity(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn category(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or_default()
    }

    /// Whether any issue is at least as severe as `threshold`.
    #[must_use]
    pub fn has_at_least(&self, threshold: Severity) -> bool {
        self.by_severity
            .iter()
            .any(|(severity, count)| *severity <= threshold && *count > 0)
    }
}
