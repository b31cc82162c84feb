use super::*;
use crate::model::Location;

fn sample() -> IssueCollector {
    let mut collector = IssueCollector::new();
    for (file, severity, category) in [
        ("a.css", Severity::Critical, Category::Accessibility),
        ("a.css", Severity::Minor, Category::Naming),
        ("b.css", Severity::Moderate, Category::BestPractice),
        ("c.css", Severity::Minor, Category::Performance),
        ("b.css", Severity::Minor, Category::Naming),
    ] {
        collector.add(Issue::new("test/rule", severity, category, "m", Location::new(file, 1, 1)));
    }
    collector
}

#[test]
fn summary_counts() {
    let report = AuditReport::new(&sample(), 4);
    let summary = &report.summary;
    assert_eq!(summary.total_issues, 5);
    assert_eq!(summary.severity(Severity::Minor), 3);
    assert_eq!(summary.severity(Severity::Critical), 1);
    assert_eq!(summary.category(Category::Naming), 2);
    assert_eq!(summary.category(Category::Unused), 0);
    assert_eq!(summary.files_with_issues, 3);
    assert_eq!(summary.files_scanned, 4);
    assert_eq!(summary.by_severity.len(), 3);
    assert_eq!(summary.by_category.len(), 7);
}

#[test]
fn partitions_have_equal_totals() {
    let report = AuditReport::new(&sample(), 3);
    let total = report.summary.total_issues;
    assert_eq!(report.issues_by_category.values().map(Vec::len).sum::<usize>(), total);
    assert_eq!(report.issues_by_severity.values().map(Vec::len).sum::<usize>(), total);
    assert_eq!(report.issues_by_file.values().map(Vec::len).sum::<usize>(), total);
    assert_eq!(report.issues().count(), total);
}

#[test]
fn recommendations_are_attached() {
    let report = AuditReport::new(&sample(), 3);
    assert!(report.recommendations[0].contains("critical accessibility"));
    assert!(report.recommendations.iter().any(|r| r.starts_with("Optimize")));
}

#[test]
fn empty_report() {
    let report = AuditReport::new(&IssueCollector::new(), 0);
    assert_eq!(report.summary.total_issues, 0);
    assert!(report.issues_by_file.is_empty());
    assert_eq!(report.summary.severity(Severity::Critical), 0);
}

#[test]
fn severity_threshold() {
    let report = AuditReport::new(&sample(), 3);
    assert!(report.summary.has_at_least(Severity::Critical));

    let minor_only: IssueCollector = [Issue::new(
        "test/rule",
        Severity::Minor,
        Category::Naming,
        "m",
        Location::new("x.css", 1, 1),
    )]
    .into_iter()
    .collect();
    let summary = AuditReport::new(&minor_only, 1).summary;
    assert!(!summary.has_at_least(Severity::Moderate));
    assert!(summary.has_at_least(Severity::Minor));
}
