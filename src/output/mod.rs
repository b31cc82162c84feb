mod html;
mod html_template;
mod json;
mod markdown;
mod path;
mod plan;
mod progress;
mod text;

pub use html::HtmlExporter;
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
pub use path::{display_path, normalize_separators};
pub(crate) use path::normalize_for_matching;
pub use plan::{PlanFormat, render_plan};
pub use progress::AuditProgress;
pub use text::{ColorMode, TextExporter};

use crate::error::Result;
use crate::report::{AuditReport, GroupBy};

/// Renders an audit report. Exporters read the report and never change it.
pub trait ReportExporter {
    /// Render the report into a string.
    ///
    /// # Errors
    /// Returns an error if the rendering fails.
    fn export(&self, report: &AuditReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
    Html,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Render `report` in `format`. `color` only affects the text format.
///
/// # Errors
/// Returns an error if the exporter fails (e.g. JSON serialization).
pub fn export_report(
    format: ExportFormat,
    report: &AuditReport,
    group_by: GroupBy,
    color: ColorMode,
) -> Result<String> {
    match format {
        ExportFormat::Text => TextExporter::new(color).with_group_by(group_by).export(report),
        ExportFormat::Markdown => MarkdownExporter::new().with_group_by(group_by).export(report),
        ExportFormat::Html => HtmlExporter::new().with_group_by(group_by).export(report),
        ExportFormat::Json => JsonExporter.export(report),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
