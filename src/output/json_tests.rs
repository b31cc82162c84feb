use super::*;
use crate::collector::IssueCollector;
use crate::issue::{Category, Severity};
use crate::model::Location;

fn parse(report: &AuditReport) -> serde_json::Value {
    let output = JsonExporter.export(report).unwrap();
    serde_json::from_str(&output).unwrap()
}

fn sample_report() -> AuditReport {
    let mut collector = IssueCollector::new();
    collector.add(
        Issue::new(
            "quality/vendor-prefix",
            Severity::Minor,
            Category::Performance,
            "'-webkit-transition' needs no prefix",
            Location::new("css/base.css", 9, 3),
        )
        .with_suggestion("Use 'transition' only"),
    );
    collector.add(
        Issue::new(
            "spacing/hardcoded-spacing",
            Severity::Minor,
            Category::BestPractice,
            "Hardcoded spacing 13px",
            Location::new("css/layout.css", 2, 3),
        )
        .with_example("margin: 13px;", "margin: var(--space-3);"),
    );
    AuditReport::new(&collector, 4)
}

#[test]
fn summary_counts() {
    let value = parse(&sample_report());
    let summary = &value["summary"];
    assert_eq!(summary["total_issues"], 2);
    assert_eq!(summary["files_scanned"], 4);
    assert_eq!(summary["files_with_issues"], 2);
    assert_eq!(summary["by_severity"]["minor"], 2);
    assert_eq!(summary["by_severity"]["critical"], 0);
    assert_eq!(summary["by_category"]["best-practice"], 1);
    assert_eq!(summary["by_category"]["unused"], 0);
}

#[test]
fn issue_fields() {
    let value = parse(&sample_report());
    let issue = &value["issues_by_file"]["css/base.css"][0];
    assert_eq!(issue["rule"], "quality/vendor-prefix");
    assert_eq!(issue["severity"], "minor");
    assert_eq!(issue["category"], "performance");
    assert_eq!(issue["file"], "css/base.css");
    assert_eq!(issue["line"], 9);
    assert_eq!(issue["column"], 3);
    assert_eq!(issue["suggestion"], "Use 'transition' only");
    assert!(issue.get("code_example").is_none());

    let spacing = &value["issues_by_category"]["best-practice"][0];
    assert_eq!(spacing["code_example"]["after"], "margin: var(--space-3);");
}

#[test]
fn groupings_partition_issues() {
    let value = parse(&sample_report());
    let count = |key: &str| {
        value[key]
            .as_object()
            .unwrap()
            .values()
            .map(|group| group.as_array().unwrap().len())
            .sum::<usize>()
    };
    assert_eq!(count("issues_by_category"), 2);
    assert_eq!(count("issues_by_severity"), 2);
    assert_eq!(count("issues_by_file"), 2);
    assert!(value["issues_by_severity"].get("critical").is_none());
}

#[test]
fn recommendations_listed() {
    let value = parse(&sample_report());
    let recommendations = value["recommendations"].as_array().unwrap();
    assert!(recommendations[0].as_str().unwrap().starts_with("Optimize"));
}
