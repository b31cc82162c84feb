use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::collector::IssueCollector;
use crate::issue::{Category, Issue, Severity};
use crate::model::Location;

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("style-audit").chain(args.iter().copied()))
}

fn audit_args(cli: &Cli) -> &AuditArgs {
    match &cli.command {
        Commands::Audit(args) => args,
        Commands::Init(_) => panic!("Expected Audit command"),
    }
}

fn report_with(severity: Severity) -> AuditReport {
    let mut collector = IssueCollector::new();
    collector.add(Issue::new(
        "test/rule",
        severity,
        Category::Naming,
        "m",
        Location::new("a.css", 1, 1),
    ));
    AuditReport::new(&collector, 1)
}

#[test]
fn exit_code_follows_fail_on() {
    let cli = parse(&["audit"]);
    let critical_only = audit_args(&cli);
    assert_eq!(exit_code(&report_with(Severity::Moderate), critical_only), EXIT_SUCCESS);
    assert_eq!(
        exit_code(&report_with(Severity::Critical), critical_only),
        EXIT_THRESHOLD_EXCEEDED
    );

    let cli = parse(&["audit", "--fail-on", "moderate"]);
    let moderate = audit_args(&cli);
    assert_eq!(exit_code(&report_with(Severity::Moderate), moderate), EXIT_THRESHOLD_EXCEEDED);
    assert_eq!(exit_code(&report_with(Severity::Minor), moderate), EXIT_SUCCESS);

    let cli = parse(&["audit", "--fail-on", "never"]);
    let never = audit_args(&cli);
    assert_eq!(exit_code(&report_with(Severity::Critical), never), EXIT_SUCCESS);
}

#[test]
fn clean_report_passes() {
    let cli = parse(&["audit", "--fail-on", "minor"]);
    let report = AuditReport::new(&IssueCollector::new(), 3);
    assert_eq!(exit_code(&report, audit_args(&cli)), EXIT_SUCCESS);
}

#[test]
fn cli_overrides_extend_config() {
    let cli = parse(&["audit", "--sequential", "-x", "**/legacy/**"]);
    let mut config = AuditConfig::default();
    apply_cli_overrides(&mut config, audit_args(&cli));
    assert!(!config.audit.parallel);
    assert!(config.scanner.exclude.contains(&"**/node_modules/**".to_string()));
    assert_eq!(config.scanner.exclude.last().map(String::as_str), Some("**/legacy/**"));
}

#[test]
fn writes_report_and_plan_files() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("base.css"),
        "@keyframes spin { to { transform: rotate(1turn); } }\n.spinner { animation: spin 1s linear infinite; }\n",
    )
    .unwrap();
    let root = dir.path().to_string_lossy().to_string();
    let report_path = dir.path().join("out/report.json");
    let plan_path = dir.path().join("out/plan.txt");
    let cli = parse(&[
        "audit",
        &root,
        "--quiet",
        "--no-config",
        "--format",
        "json",
        "--output",
        report_path.to_str().unwrap(),
        "--plan-output",
        plan_path.to_str().unwrap(),
    ]);

    let code = run_audit_impl(audit_args(&cli), &cli).unwrap();
    assert_eq!(code, EXIT_THRESHOLD_EXCEEDED);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert!(report["issues_by_file"]["base.css"].is_array());
    assert!(fs::read_to_string(&plan_path).unwrap().starts_with("Fix Plan ("));
}

#[test]
fn missing_path_is_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere").to_string_lossy().to_string();
    let cli = parse(&["audit", &missing, "--quiet", "--no-config"]);
    assert!(run_audit_impl(audit_args(&cli), &cli).is_err());
    assert_eq!(run_audit(audit_args(&cli), &cli), EXIT_CONFIG_ERROR);
}
