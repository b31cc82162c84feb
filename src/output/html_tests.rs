use super::*;
use crate::collector::IssueCollector;
use crate::issue::Category;
use crate::model::Location;

fn sample_report() -> AuditReport {
    let mut collector = IssueCollector::new();
    collector.add(
        Issue::new(
            "quality/id-selector",
            Severity::Moderate,
            Category::BestPractice,
            "'#nav > a' uses an ID selector",
            Location::new("site/nav.css", 5, 1),
        )
        .with_suggestion("Use a class such as .nav instead")
        .with_example("#nav > a { }", ".nav > a { }"),
    );
    AuditReport::new(&collector, 2)
}

#[test]
fn complete_document() {
    let output = HtmlExporter::new().export(&sample_report()).unwrap();
    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<title>Style Audit Report</title>"));
    assert!(output.trim_end().ends_with("</html>"));
}

#[test]
fn escapes_issue_text() {
    let output = HtmlExporter::new().export(&sample_report()).unwrap();
    assert!(output.contains("&#39;#nav &gt; a&#39; uses an ID selector"));
    assert!(output.contains("/* before */\n#nav &gt; a { }"));
    assert!(!output.contains("'#nav > a'"));
}

#[test]
fn issue_cards_carry_severity() {
    let output = HtmlExporter::new().export(&sample_report()).unwrap();
    assert!(output.contains(r#"<div class="issue moderate" data-severity="moderate">"#));
    assert!(output.contains(r#"<span class="location">site/nav.css:5:1</span>"#));
    assert!(output.contains(r#"data-filter="critical""#));
    assert!(output.contains("<h3>Best practice (1)</h3>"));
}

#[test]
fn summary_cards() {
    let output = HtmlExporter::new().export(&sample_report()).unwrap();
    assert!(output.contains(r#"<span class="label">Files Scanned</span>"#));
    assert!(output.contains(r#"<div class="summary-card moderate">"#));
}

#[test]
fn file_grouping() {
    let output = HtmlExporter::new()
        .with_group_by(GroupBy::File)
        .export(&sample_report())
        .unwrap();
    assert!(output.contains("<h3>site/nav.css (1)</h3>"));
}

#[test]
fn clean_report() {
    let report = AuditReport::new(&IssueCollector::new(), 1);
    let output = HtmlExporter::new().export(&report).unwrap();
    assert!(output.contains("No issues found."));
    assert!(!output.contains("filter-btn active"));
    assert!(output.contains("<ol class=\"recommendations\">"));
}
