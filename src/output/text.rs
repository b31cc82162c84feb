use std::fmt::Write;

use crate::error::Result;
use crate::issue::{Issue, Severity};
use crate::report::{AuditReport, GroupBy, group_issues};

use super::ReportExporter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextExporter {
    use_colors: bool,
    group_by: GroupBy,
}

impl TextExporter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            group_by: GroupBy::default(),
        }
    }

    #[must_use]
    pub const fn with_group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "✗",
            Severity::Moderate => "⚠",
            Severity::Minor => "•",
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => ansi::RED,
            Severity::Moderate => ansi::YELLOW,
            Severity::Minor => ansi::CYAN,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_issue(&self, issue: &Issue, output: &mut String) {
        let icon = Self::severity_icon(issue.severity);
        let label = self.paint(
            &issue.severity.label().to_uppercase(),
            Self::severity_color(issue.severity),
        );
        let location = &issue.location;
        writeln!(
            output,
            "  {icon} {label} [{}] {}:{}:{}",
            issue.category,
            issue.file_key(),
            location.line,
            location.column
        )
        .ok();
        writeln!(output, "    {} ({})", issue.message, self.paint(&issue.rule, ansi::DIM)).ok();
        if !issue.suggestion.is_empty() {
            writeln!(output, "    → {}", issue.suggestion).ok();
        }
        if let Some(example) = &issue.code_example {
            for line in example.before.lines() {
                writeln!(output, "      - {line}").ok();
            }
            for line in example.after.lines() {
                writeln!(output, "      + {line}").ok();
            }
        }
    }

    fn format_summary(&self, report: &AuditReport, output: &mut String) {
        let summary = &report.summary;
        writeln!(output, "{}", self.paint("Summary", ansi::BOLD)).ok();
        writeln!(
            output,
            "  {} issues in {} of {} files",
            summary.total_issues, summary.files_with_issues, summary.files_scanned
        )
        .ok();

        let severities: Vec<String> = summary
            .by_severity
            .iter()
            .map(|(severity, count)| {
                self.paint(&format!("{count} {severity}"), Self::severity_color(*severity))
            })
            .collect();
        writeln!(output, "  {}", severities.join(", ")).ok();

        let categories: Vec<String> = summary
            .by_category
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(category, count)| format!("{category}={count}"))
            .collect();
        if !categories.is_empty() {
            writeln!(output, "  {}", categories.join(", ")).ok();
        }
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportExporter for TextExporter {
    fn export(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        for group in group_issues(report, self.group_by) {
            writeln!(
                output,
                "{} ({})",
                self.paint(&group.label, ansi::BOLD),
                group.issues.len()
            )
            .ok();
            for issue in group.issues {
                self.format_issue(issue, &mut output);
            }
            writeln!(output).ok();
        }

        self.format_summary(report, &mut output);

        if !report.recommendations.is_empty() {
            writeln!(output).ok();
            writeln!(output, "{}", self.paint("Recommendations", ansi::BOLD)).ok();
            for (idx, recommendation) in report.recommendations.iter().enumerate() {
                writeln!(output, "  {}. {recommendation}", idx + 1).ok();
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
