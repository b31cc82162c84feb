//! Accumulates the issues of one audit run.

use indexmap::IndexMap;

use crate::issue::{Category, Issue, Severity};

/// Append-only issue list for one audit run.
///
/// The grouping methods are projections over the current list: every issue lands in
/// exactly one group, so each grouping has the same total as [`IssueCollector::len`].
#[derive(Debug, Clone, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Non-empty groups in [`Category::ALL`] order.
    #[must_use]
    pub fn by_category(&self) -> IndexMap<Category, Vec<&Issue>> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.issues.iter().filter(|i| i.category == *c).collect::<Vec<_>>()))
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }

    /// Non-empty groups, most severe first.
    #[must_use]
    pub fn by_severity(&self) -> IndexMap<Severity, Vec<&Issue>> {
        Severity::ALL
            .iter()
            .map(|s| (*s, self.issues.iter().filter(|i| i.severity == *s).collect::<Vec<_>>()))
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }

    /// Groups keyed by file, in order of first appearance.
    #[must_use]
    pub fn by_file(&self) -> IndexMap<String, Vec<&Issue>> {
        let mut groups: IndexMap<String, Vec<&Issue>> = IndexMap::new();
        for issue in &self.issues {
            groups.entry(issue.file_key()).or_default().push(issue);
        }
        groups
    }

    #[must_use]
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    #[must_use]
    pub fn count_category(&self, category: Category) -> usize {
        self.issues.iter().filter(|i| i.category == category).count()
    }

    #[must_use]
    pub fn count_where(&self, predicate: impl Fn(&Issue) -> bool) -> usize {
        self.issues.iter().filter(|i| predicate(i)).count()
    }

    /// Number of distinct files with at least one issue.
    #[must_use]
    pub fn files_with_issues(&self) -> usize {
        self.by_file().len()
    }
}

impl FromIterator<Issue> for IssueCollector {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
