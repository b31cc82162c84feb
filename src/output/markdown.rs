use std::fmt::Write;

use crate::error::Result;
use crate::issue::{Issue, Severity};
use crate::report::{AuditReport, GroupBy, group_issues};

use super::ReportExporter;

pub struct MarkdownExporter {
    group_by: GroupBy,
}

impl MarkdownExporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            group_by: GroupBy::Category,
        }
    }

    #[must_use]
    pub const fn with_group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "🔴",
            Severity::Moderate => "🟠",
            Severity::Minor => "🔵",
        }
    }

    fn write_issue(output: &mut String, issue: &Issue) {
        let location = &issue.location;
        writeln!(
            output,
            "- {} **{}** `{}:{}:{}` ({}, `{}`)",
            Self::severity_icon(issue.severity),
            issue.severity,
            issue.file_key(),
            location.line,
            location.column,
            issue.category,
            issue.rule
        )
        .ok();
        writeln!(output, "  - {}", escape_inline(&issue.message)).ok();
        if !issue.suggestion.is_empty() {
            writeln!(output, "  - Suggestion: {}", escape_inline(&issue.suggestion)).ok();
        }
        if let Some(example) = &issue.code_example {
            writeln!(output).ok();
            writeln!(output, "  ```css").ok();
            if !example.before.is_empty() {
                writeln!(output, "  /* before */").ok();
                for line in example.before.lines() {
                    writeln!(output, "  {line}").ok();
                }
            }
            writeln!(output, "  /* after */").ok();
            for line in example.after.lines() {
                writeln!(output, "  {line}").ok();
            }
            writeln!(output, "  ```").ok();
            writeln!(output).ok();
        }
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep issue text from being read as table or emphasis markup.
fn escape_inline(text: &str) -> String {
    text.replace('|', "\\|").replace('*', "\\*").replace('_', "\\_")
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        writeln!(output, "## Style Audit Results\n").ok();
        writeln!(output, "| Metric | Count |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Files Scanned | {} |", summary.files_scanned).ok();
        writeln!(output, "| Files With Issues | {} |", summary.files_with_issues).ok();
        writeln!(output, "| Total Issues | {} |", summary.total_issues).ok();
        for (severity, count) in &summary.by_severity {
            writeln!(
                output,
                "| {} {} | {count} |",
                Self::severity_icon(*severity),
                severity.label()
            )
            .ok();
        }
        writeln!(output).ok();

        if summary.total_issues > 0 {
            writeln!(output, "### By Category\n").ok();
            writeln!(output, "| Category | Issues |").ok();
            writeln!(output, "|----------|-------:|").ok();
            for (category, count) in summary.by_category.iter().filter(|(_, n)| **n > 0) {
                writeln!(output, "| {} | {count} |", category.title()).ok();
            }
            writeln!(output).ok();

            writeln!(output, "### Details\n").ok();
            for group in group_issues(report, self.group_by) {
                writeln!(output, "#### {} ({})\n", group.label, group.issues.len()).ok();
                for issue in group.issues {
                    Self::write_issue(&mut output, issue);
                }
                writeln!(output).ok();
            }
        }

        if !report.recommendations.is_empty() {
            writeln!(output, "### Recommendations\n").ok();
            for (idx, recommendation) in report.recommendations.iter().enumerate() {
                writeln!(output, "{}. {recommendation}", idx + 1).ok();
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
