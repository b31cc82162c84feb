//! Integration tests for the `audit` command.

mod common;

use common::{
    CLEAN_SHEET, HARDCODED_MARGIN, INVISIBLE_TEXT, PLAIN_CONFIG, TestFixture, UNGUARDED_ANIMATION,
};
use predicates::prelude::*;

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn clean_project_passes() {
    let fixture = TestFixture::new();
    fixture.create_config(PLAIN_CONFIG);
    fixture.create_file("styles/card.css", CLEAN_SHEET);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary"));
}

#[test]
fn critical_issue_fails_by_default() {
    let fixture = TestFixture::new();
    fixture.create_config(PLAIN_CONFIG);
    fixture.create_file("card.css", INVISIBLE_TEXT);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("color/low-contrast"))
        .stdout(predicate::str::contains("card.css:1:1"));
}

#[test]
fn fail_on_never_always_passes() {
    let fixture = TestFixture::new();
    fixture.create_file("motion.css", UNGUARDED_ANIMATION);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--fail-on", "never", "--no-config"])
        .assert()
        .success();
}

#[test]
fn fail_on_moderate_catches_hardcoded_spacing() {
    let fixture = TestFixture::new();
    fixture.create_file("box.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config"])
        .assert()
        .success();

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config", "--fail-on", "moderate"])
        .assert()
        .code(1);
}

#[test]
fn missing_path_is_an_error() {
    let fixture = TestFixture::new();

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

// =============================================================================
// Formats and outputs
// =============================================================================

#[test]
fn json_report_counts_issues() {
    let fixture = TestFixture::new();
    fixture.create_file("motion.css", UNGUARDED_ANIMATION);

    let output = style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config", "--format", "json", "--fail-on", "never"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["summary"]["files_scanned"], 1);
    assert_eq!(value["summary"]["by_severity"]["critical"], 1);
    let critical = value["issues_by_severity"]["critical"].as_array().unwrap();
    assert_eq!(critical[0]["rule"], "animation/missing-reduced-motion");
    assert_eq!(critical[0]["file"], "motion.css");
}

#[test]
fn markdown_grouped_by_file() {
    let fixture = TestFixture::new();
    fixture.create_file("a.css", HARDCODED_MARGIN);
    fixture.create_file("nested/b.scss", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config", "--format", "markdown", "--group-by", "file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Style Audit Results"))
        .stdout(predicate::str::contains("#### a.css"))
        .stdout(predicate::str::contains("#### nested/b.scss"));
}

#[test]
fn html_report_written_to_file() {
    let fixture = TestFixture::new();
    fixture.create_file("a.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config", "--format", "html", "--output", "reports/audit.html"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fixture.read("reports/audit.html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("spacing/hardcoded-spacing"));
}

#[test]
fn plan_follows_report() {
    let fixture = TestFixture::new();
    fixture.create_file("motion.css", UNGUARDED_ANIMATION);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config", "--plan", "--fail-on", "never", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix Plan ("))
        .stdout(predicate::str::contains("Id: critical-accessibility"));
}

#[test]
fn json_plan_to_file() {
    let fixture = TestFixture::new();
    fixture.create_file("a.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args([
            "audit",
            "--no-config",
            "--plan-format",
            "json",
            "--plan-output",
            "plan.json",
            "--quiet",
        ])
        .assert()
        .success();

    let plan: serde_json::Value = serde_json::from_str(&fixture.read("plan.json")).unwrap();
    let order = plan["priority_order"].as_array().unwrap();
    let ids: Vec<_> = plan["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].clone())
        .collect();
    assert_eq!(order, &ids);
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn default_excludes_and_cli_excludes() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.css", HARDCODED_MARGIN);
    fixture.create_file("node_modules/lib/lib.css", INVISIBLE_TEXT);
    fixture.create_file("dist/app.min.css", INVISIBLE_TEXT);
    fixture.create_file("legacy/old.css", INVISIBLE_TEXT);

    let output = style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config", "--format", "json", "-x", "legacy/**"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["summary"]["files_scanned"], 1);
    let files: Vec<_> = value["issues_by_file"].as_object().unwrap().keys().cloned().collect();
    assert_eq!(files, vec!["src/app.css"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn single_file_argument() {
    let fixture = TestFixture::new();
    fixture.create_file("one.css", INVISIBLE_TEXT);
    fixture.create_file("two.css", HARDCODED_MARGIN);

    let output = style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "one.css", "--no-config", "--format", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["files_scanned"], 1);
    assert!(value["issues_by_file"]["one.css"].is_array());
}

#[test]
fn unparsable_file_is_a_warning() {
    let fixture = TestFixture::new();
    fixture.create_file("broken.css", ".broken { color: red;\n");
    fixture.create_file("ok.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config", "--color", "never"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: broken.css: parse error"))
        .stdout(predicate::str::contains("ok.css"));
}

#[test]
fn sequential_matches_parallel() {
    let fixture = TestFixture::new();
    for n in 0..8 {
        fixture.create_file(&format!("s{n}.css"), &format!(".item{n} {{ margin: {n}px; }}\n"));
    }

    let run = |extra: &[&str]| {
        let mut args = vec!["audit", "--no-config", "--format", "json"];
        args.extend_from_slice(extra);
        style_audit!()
            .current_dir(fixture.path())
            .args(&args)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(&[]), run(&["--sequential"]));
}
