use crate::issue::Issue;

use super::AuditReport;

/// How the detailed report groups issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    #[default]
    Category,
    Severity,
    File,
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "severity" => Ok(Self::Severity),
            "file" => Ok(Self::File),
            _ => Err(format!("Unknown grouping: {s}")),
        }
    }
}

/// One labelled group of the detailed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueGroup<'a> {
    pub label: String,
    pub issues: Vec<&'a Issue>,
}

/// The report's issues under the chosen grouping, borrowed as-is.
#[must_use]
pub fn group_issues(report: &AuditReport, group_by: GroupBy) -> Vec<IssueGroup<'_>> {
    match group_by {
        GroupBy::Category => report
            .issues_by_category
            .iter()
            .map(|(category, issues)| IssueGroup {
                label: category.title().to_string(),
                issues: issues.iter().collect(),
            })
            .collect(),
        GroupBy::Severity => report
            .issues_by_severity
            .iter()
            .map(|(severity, issues)| IssueGroup {
                label: severity.title().to_string(),
                issues: issues.iter().collect(),
            })
            .collect(),
        GroupBy::File => report
            .issues_by_file
            .iter()
            .map(|(file, issues)| IssueGroup {
                label: file.clone(),
                issues: issues.iter().collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "detailed_tests.rs"]
mod tests;
