use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::issue::{CodeExample, Issue};
use crate::report::AuditReport;

use super::ReportExporter;

pub struct JsonExporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    issues_by_category: IndexMap<&'static str, Vec<JsonIssue<'a>>>,
    issues_by_severity: IndexMap<&'static str, Vec<JsonIssue<'a>>>,
    issues_by_file: IndexMap<&'a str, Vec<JsonIssue<'a>>>,
    recommendations: &'a [String],
}

#[derive(Serialize)]
struct Summary {
    total_issues: usize,
    files_scanned: usize,
    files_with_issues: usize,
    by_severity: IndexMap<&'static str, usize>,
    by_category: IndexMap<&'static str, usize>,
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    rule: &'a str,
    severity: &'static str,
    category: &'static str,
    file: String,
    line: usize,
    column: usize,
    message: &'a str,
    suggestion: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_example: Option<&'a CodeExample>,
}

fn convert_issue(issue: &Issue) -> JsonIssue<'_> {
    JsonIssue {
        rule: &issue.rule,
        severity: issue.severity.label(),
        category: issue.category.label(),
        file: issue.file_key(),
        line: issue.location.line,
        column: issue.location.column,
        message: &issue.message,
        suggestion: &issue.suggestion,
        code_example: issue.code_example.as_ref(),
    }
}

fn convert_all(issues: &[Issue]) -> Vec<JsonIssue<'_>> {
    issues.iter().map(convert_issue).collect()
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &AuditReport) -> Result<String> {
        let summary = &report.summary;
        let output = JsonOutput {
            summary: Summary {
                total_issues: summary.total_issues,
                files_scanned: summary.files_scanned,
                files_with_issues: summary.files_with_issues,
                by_severity: summary
                    .by_severity
                    .iter()
                    .map(|(severity, count)| (severity.label(), *count))
                    .collect(),
                by_category: summary
                    .by_category
                    .iter()
                    .map(|(category, count)| (category.label(), *count))
                    .collect(),
            },
            issues_by_category: report
                .issues_by_category
                .iter()
                .map(|(category, issues)| (category.label(), convert_all(issues)))
                .collect(),
            issues_by_severity: report
                .issues_by_severity
                .iter()
                .map(|(severity, issues)| (severity.label(), convert_all(issues)))
                .collect(),
            issues_by_file: report
                .issues_by_file
                .iter()
                .map(|(file, issues)| (file.as_str(), convert_all(issues)))
                .collect(),
            recommendations: &report.recommendations,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
