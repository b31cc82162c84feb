//! Prioritized, time-estimated remediation tasks.

use std::cmp::Reverse;
use std::fmt::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::issue::{Category, Issue, Severity};

const fn severity_weight(severity: Severity) -> usize {
    match severity {
        Severity::Critical => 100,
        Severity::Moderate => 50,
        Severity::Minor => 10,
    }
}

/// Minutes needed to fix one issue of the given severity.
const fn base_minutes(severity: Severity) -> usize {
    match severity {
        Severity::Critical => 30,
        Severity::Moderate => 15,
        Severity::Minor => 5,
    }
}

/// Render a duration as `"N minutes"` below an hour, otherwise in hours
/// (`"1 hour"`, `"2.5 hours"`).
#[must_use]
pub fn format_minutes(minutes: usize) -> String {
    if minutes < 60 {
        return format!("{minutes} minutes");
    }
    #[allow(clippy::cast_precision_loss)]
    let hours = (minutes as f64 / 60.0 * 10.0).round() / 10.0;
    if (hours - 1.0).abs() < f64::EPSILON {
        "1 hour".to_string()
    } else if hours.fract() == 0.0 {
        format!("{hours:.0} hours")
    } else {
        format!("{hours:.1} hours")
    }
}

/// All issues of one (severity, category) pair, fixed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: usize,
    pub severity: Severity,
    pub category: Category,
    pub related_issues: Vec<Issue>,
    pub estimated_minutes: usize,
    pub estimated_time: String,
}

impl FixTask {
    fn new(severity: Severity, category: Category, issues: Vec<Issue>) -> Self {
        let count = issues.len();
        let estimated_minutes = base_minutes(severity) * count;
        Self {
            id: format!("{}-{}", severity.label(), category.label()),
            title: format!(
                "Fix {count} {} {} issue{}",
                severity.label(),
                category.label(),
                if count == 1 { "" } else { "s" }
            ),
            description: describe(&issues),
            priority: severity_weight(severity) + count,
            severity,
            category,
            related_issues: issues,
            estimated_minutes,
            estimated_time: format_minutes(estimated_minutes),
        }
    }

    /// Priority recomputed from the task's own issues.
    #[must_use]
    pub fn expected_priority(&self) -> usize {
        severity_weight(self.severity) + self.related_issues.len()
    }
}

/// Affected files, then each distinct message with its occurrence count.
fn describe(issues: &[Issue]) -> String {
    let mut files: Vec<String> = Vec::new();
    let mut messages: IndexMap<(&str, &str), usize> = IndexMap::new();
    for issue in issues {
        let file = issue.file_key();
        if !files.contains(&file) {
            files.push(file);
        }
        *messages
            .entry((issue.rule.as_str(), issue.message.as_str()))
            .or_default() += 1;
    }

    let mut out = format!("Affected files ({}): {}\n", files.len(), files.join(", "));
    for ((rule, message), count) in &messages {
        write!(out, "\n- [{rule}] {message}").ok();
        if *count > 1 {
            write!(out, " (x{count})").ok();
        }
    }
    out
}

/// Ordered remediation plan for one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixPlan {
    pub tasks: Vec<FixTask>,
    pub total_minutes: usize,
    pub estimated_effort: String,
}

impl FixPlan {
    /// Group issues by (severity, category) into tasks, highest priority first.
    ///
    /// Ties are broken by severity rank and then category order.
    #[must_use]
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut groups: IndexMap<(Severity, Category), Vec<Issue>> = IndexMap::new();
        for issue in issues {
            groups
                .entry((issue.severity, issue.category))
                .or_default()
                .push(issue.clone());
        }

        let mut tasks: Vec<FixTask> = groups
            .into_iter()
            .map(|((severity, category), issues)| FixTask::new(severity, category, issues))
            .collect();
        tasks.sort_by_key(|t| (Reverse(t.priority), t.severity, t.category));

        let total_minutes = tasks.iter().map(|t| t.estimated_minutes).sum();
        Self {
            tasks,
            total_minutes,
            estimated_effort: format_minutes(total_minutes),
        }
    }

    /// Task ids in execution order.
    #[must_use]
    pub fn priority_order(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
#[path = "fix_plan_tests.rs"]
mod tests;
