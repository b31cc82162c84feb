use std::path::Path;

use super::*;
use crate::parser::{CssParser, StyleSheetParser};

const HEADER: &str = "/* Components */\n";

fn check(content: &str) -> Vec<Issue> {
    let text = format!("{HEADER}{content}");
    let sheet = CssParser::new()
        .parse(Path::new("layout.css"), &text)
        .unwrap();
    ResponsiveChecker::new(&ResponsiveConfig::default()).check(&sheet, Some(&text))
}

fn with_rule<'a>(issues: &'a [Issue], rule: &str) -> Vec<&'a Issue> {
    issues.iter().filter(|i| i.rule == rule).collect()
}

#[test]
fn width_features_convert_relative_units() {
    let features = width_features("(min-width: 48em) and (max-width: 63.9375rem)");
    assert_eq!(features.len(), 2);
    assert_eq!(features[0], WidthFeature { bound: Bound::Min, px: 768.0 });
    assert_eq!(features[1].bound, Bound::Max);
    assert!((features[1].px - 1023.0).abs() < f64::EPSILON);
    assert!(width_features("(prefers-color-scheme: dark)").is_empty());
}

#[test]
fn standard_breakpoints_within_tolerance_are_accepted() {
    let issues = check(
        "@media (max-width: 767px) { .a { order: 1; } }\n@media (min-width: 64em) { .b { order: 2; } }\n",
    );
    assert!(with_rule(&issues, "responsive/non-standard-breakpoint").is_empty());
}

#[test]
fn non_standard_breakpoint_suggests_nearest() {
    let issues = check("@media (max-width: 900px) { .a { order: 1; } }\n");
    let found = with_rule(&issues, "responsive/non-standard-breakpoint");
    assert_eq!(found.len(), 1);
    assert!(found[0].message.contains("900px"));
    assert!(found[0].suggestion.contains("1024px"));
    assert_eq!(found[0].location.line, 2);
}

#[test]
fn near_duplicate_breakpoints() {
    let issues = check(
        "@media (max-width: 768px) { .a { order: 1; } }\n@media (max-width: 760px) { .b { order: 2; } }\n@media (max-width: 767px) { .c { order: 3; } }\n",
    );
    let found = with_rule(&issues, "responsive/near-duplicate-breakpoint");
    // 760 is 8 from 768 and 7 from 767; 767 is within tolerance of 768.
    let lines: Vec<_> = found.iter().map(|i| i.location.line).collect();
    assert_eq!(lines, vec![3, 4]);
}

#[test]
fn small_touch_targets_on_interactive_classes() {
    let issues = check(
        ".icon-btn { width: 32px; height: 2rem; }\n.close { min-height: 48px; }\n.avatar { width: 24px; }\n@media (max-width: 768px) { .a { order: 1; } }\n",
    );
    let found = with_rule(&issues, "responsive/small-touch-target");
    assert_eq!(found.len(), 2);
    assert!(found[0].message.contains("32px"));
    assert!(found[1].message.contains("height"));
    assert!(
        found
            .iter()
            .all(|i| i.severity == Severity::Moderate && i.category == Category::Accessibility)
    );
}

#[test]
fn shared_declarations_are_reported_once() {
    let issues = check(
        ".btn, .link { height: 20px; }\n@media (min-width: 640px) { .a { order: 1; } }\n",
    );
    assert_eq!(with_rule(&issues, "responsive/small-touch-target").len(), 1);
}

#[test]
fn missing_mobile_query() {
    let issues = check(".btn-primary { color: var(--text-on-accent); }\n");
    let found = with_rule(&issues, "responsive/missing-mobile-query");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location.line, 1);
    assert_eq!(found[0].severity, Severity::Moderate);

    let desktop_only = check(
        ".btn-primary { color: var(--text-on-accent); }\n@media (max-width: 1280px) { .btn-primary { order: 1; } }\n",
    );
    assert_eq!(with_rule(&desktop_only, "responsive/missing-mobile-query").len(), 1);

    let mobile_first = check(
        ".btn-primary { color: var(--text-on-accent); }\n@media (min-width: 1024px) { .btn-primary { order: 1; } }\n",
    );
    assert!(with_rule(&mobile_first, "responsive/missing-mobile-query").is_empty());
}

#[test]
fn no_interactive_classes_needs_no_mobile_query() {
    let issues = check(".card { display: grid; }\n");
    assert!(with_rule(&issues, "responsive/missing-mobile-query").is_empty());
}

#[test]
fn organization_rules_run_with_responsive() {
    let sheet = CssParser::new()
        .parse(Path::new("x.css"), ".card { display: grid; }\n")
        .unwrap();
    let issues = ResponsiveChecker::new(&ResponsiveConfig::default())
        .check(&sheet, Some(".card { display: grid; }\n"));
    assert_eq!(with_rule(&issues, "organization/missing-file-header").len(), 1);
}
