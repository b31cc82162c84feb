use super::*;
use crate::issue::{Category, Issue, Severity};
use crate::model::Location;

fn issue(severity: Severity, category: Category, file: &str, line: usize) -> Issue {
    Issue::new(
        "test/rule",
        severity,
        category,
        format!("problem at {line}"),
        Location::new(file, line, 1),
    )
}

fn sample_plan() -> FixPlan {
    FixPlan::from_issues(&[
        issue(Severity::Minor, Category::Naming, "a.css", 1),
        issue(Severity::Critical, Category::Accessibility, "b.css", 4),
        issue(Severity::Minor, Category::Naming, "a.css", 9),
    ])
}

#[test]
fn parses_plan_formats() {
    assert_eq!("TEXT".parse::<PlanFormat>(), Ok(PlanFormat::Text));
    assert_eq!("json".parse::<PlanFormat>(), Ok(PlanFormat::Json));
    assert!("yaml".parse::<PlanFormat>().is_err());
}

#[test]
fn text_lists_tasks_in_priority_order() {
    let output = render_plan(PlanFormat::Text, &sample_plan()).unwrap();
    assert!(output.starts_with("Fix Plan (2 tasks, 40 minutes)"));
    let critical = output.find("1. Fix 1 critical accessibility issue").unwrap();
    let minor = output.find("2. Fix 2 minor naming issues").unwrap();
    assert!(critical < minor);
    assert!(output.contains("   Priority: 101 | Estimated time: 30 minutes | Id: critical-accessibility"));
    assert!(output.contains("   Affected files (1): a.css"));
    assert!(output.contains("   - [test/rule] problem at 9"));
}

#[test]
fn text_for_empty_plan() {
    let output = render_plan(PlanFormat::Text, &FixPlan::from_issues(&[])).unwrap();
    assert!(output.starts_with("Fix Plan (0 tasks, 0 minutes)"));
    assert!(output.contains("Nothing to fix."));
}

#[test]
fn json_plan() {
    let output = render_plan(PlanFormat::Json, &sample_plan()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total_minutes"], 40);
    assert_eq!(value["estimated_effort"], "40 minutes");
    assert_eq!(
        value["priority_order"],
        serde_json::json!(["critical-accessibility", "minor-naming"])
    );
    let task = &value["tasks"][1];
    assert_eq!(task["id"], "minor-naming");
    assert_eq!(task["priority"], 12);
    assert_eq!(task["severity"], "minor");
    assert_eq!(task["estimated_minutes"], 10);
    assert_eq!(task["issues"].as_array().unwrap().len(), 2);
    assert_eq!(task["issues"][1]["line"], 9);
    assert_eq!(task["issues"][0]["file"], "a.css");
}
