use std::fmt::Write;

use crate::error::Result;
use crate::issue::{Issue, Severity};
use crate::report::{AuditReport, GroupBy, Summary, group_issues};

use super::ReportExporter;
use super::html_template::{HTML_FOOTER, HTML_HEADER};

/// Renders a standalone HTML report.
pub struct HtmlExporter {
    group_by: GroupBy,
}

impl HtmlExporter {
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

    fn write_summary(output: &mut String, summary: &Summary) {
        output.push_str("        <div class=\"summary-grid\">\n");
        let mut card = |class: &str, value: usize, label: &str| {
            writeln!(
                output,
                r#"            <div class="summary-card {class}">
                <span class="value">{value}</span>
                <span class="label">{label}</span>
            </div>"#
            )
            .ok();
        };
        card("", summary.files_scanned, "Files Scanned");
        card("", summary.total_issues, "Total Issues");
        for (severity, count) in &summary.by_severity {
            card(severity.label(), *count, severity.title());
        }
        output.push_str("        </div>\n");
    }

    fn write_categories(output: &mut String, summary: &Summary) {
        output.push_str("        <h2>By Category</h2>\n");
        output.push_str("        <table class=\"categories\">\n");
        output.push_str("            <thead><tr><th>Category</th><th>Issues</th></tr></thead>\n");
        output.push_str("            <tbody>\n");
        for (category, count) in summary.by_category.iter().filter(|(_, n)| **n > 0) {
            writeln!(
                output,
                r#"                <tr><td>{}</td><td class="number">{count}</td></tr>"#,
                category.title()
            )
            .ok();
        }
        output.push_str("            </tbody>\n");
        output.push_str("        </table>\n");
    }

    fn write_filters(output: &mut String) {
        output.push_str("        <div class=\"filter-controls\">\n");
        output.push_str(
            "            <button class=\"filter-btn active\" data-filter=\"all\">All</button>\n",
        );
        for severity in Severity::ALL {
            writeln!(
                output,
                r#"            <button class="filter-btn" data-filter="{0}">{1}</button>"#,
                severity.label(),
                severity.title()
            )
            .ok();
        }
        output.push_str("        </div>\n");
    }

    fn write_issue(output: &mut String, issue: &Issue) {
        let severity = issue.severity.label();
        let location = &issue.location;
        writeln!(
            output,
            r#"        <div class="issue {severity}" data-severity="{severity}">"#
        )
        .ok();
        writeln!(
            output,
            r#"            <div class="meta"><span class="badge {severity}">{severity}</span> {} &middot; <span class="location">{}:{}:{}</span> &middot; {}</div>"#,
            issue.category,
            html_escape(&issue.file_key()),
            location.line,
            location.column,
            html_escape(&issue.rule)
        )
        .ok();
        writeln!(
            output,
            r#"            <div class="message">{}</div>"#,
            html_escape(&issue.message)
        )
        .ok();
        if !issue.suggestion.is_empty() {
            writeln!(
                output,
                r#"            <div class="suggestion">{}</div>"#,
                html_escape(&issue.suggestion)
            )
            .ok();
        }
        if let Some(example) = &issue.code_example {
            output.push_str("            <pre><code>");
            if !example.before.is_empty() {
                writeln!(output, "/* before */\n{}", html_escape(&example.before)).ok();
            }
            write!(output, "/* after */\n{}", html_escape(&example.after)).ok();
            output.push_str("</code></pre>\n");
        }
        output.push_str("        </div>\n");
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportExporter for HtmlExporter {
    fn export(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::from(HTML_HEADER);

        Self::write_summary(&mut output, &report.summary);

        if report.summary.total_issues == 0 {
            output.push_str("        <p class=\"no-results\">No issues found.</p>\n");
        } else {
            Self::write_categories(&mut output, &report.summary);
            output.push_str("        <h2>Issues</h2>\n");
            Self::write_filters(&mut output);
            for group in group_issues(report, self.group_by) {
                writeln!(
                    output,
                    "        <h3>{} ({})</h3>",
                    html_escape(&group.label),
                    group.issues.len()
                )
                .ok();
                for issue in group.issues {
                    Self::write_issue(&mut output, issue);
                }
            }
        }

        if !report.recommendations.is_empty() {
            output.push_str("        <h2>Recommendations</h2>\n");
            output.push_str("        <ol class=\"recommendations\">\n");
            for recommendation in &report.recommendations {
                writeln!(output, "            <li>{}</li>", html_escape(recommendation)).ok();
            }
            output.push_str("        </ol>\n");
        }

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
