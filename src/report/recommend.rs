use crate::collector::IssueCollector;
use crate::issue::{Category, Issue, Severity};

/// More naming issues than this suggest there is no shared convention.
const NAMING_THRESHOLD: usize = 10;

const DUPLICATION_THRESHOLD: usize = 5;

const HARDCODED_THRESHOLD: usize = 20;

const PROCESS_RECOMMENDATIONS: &[&str] = &[
    "Enforce these conventions with a style-sheet linter in the editor and in CI",
    "Gate style changes in code review on a clean audit for the touched files",
    "Re-run the audit periodically and track the issue counts over time",
];

fn is_hardcoded_value(issue: &Issue) -> bool {
    issue
        .rule
        .split_once('/')
        .is_some_and(|(_, rule)| rule.starts_with("hardcoded-"))
}

/// Guidance derived from issue counts, followed by the standing process advice.
#[must_use]
pub fn recommendations(collector: &IssueCollector) -> Vec<String> {
    let mut out = Vec::new();

    let critical_a11y = collector
        .count_where(|i| i.severity == Severity::Critical && i.category == Category::Accessibility);
    if critical_a11y > 0 {
        out.push(format!(
            "Fix the {critical_a11y} critical accessibility issue(s) immediately; they block keyboard, low-vision or motion-sensitive users"
        ));
    }

    let naming = collector.count_category(Category::Naming);
    if naming > NAMING_THRESHOLD {
        out.push(format!(
            "Unify the naming convention: {naming} naming issues show variables and classes follow no shared scheme"
        ));
    }

    let performance = collector.count_category(Category::Performance);
    if performance > 0 {
        out.push(format!(
            "Optimize the style sheets: remove the {performance} unnecessary vendor prefix(es) and other performance issues"
        ));
    }

    let duplication = collector.count_category(Category::Duplication);
    if duplication > DUPLICATION_THRESHOLD {
        out.push(format!(
            "Consolidate repeated patterns: {duplication} duplicated variables or declaration blocks could be shared"
        ));
    }

    let hardcoded = collector.count_where(is_hardcoded_value);
    if hardcoded > HARDCODED_THRESHOLD {
        out.push(format!(
            "Adopt design tokens: {hardcoded} hardcoded colors, sizes and timings should come from variables"
        ));
    }

    out.extend(PROCESS_RECOMMENDATIONS.iter().map(ToString::to_string));
    out
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
