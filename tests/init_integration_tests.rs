//! Integration tests for the `init` command.

mod common;

use common::{HARDCODED_MARGIN, TestFixture};
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    style_audit!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".style-audit.toml");
    assert!(content.contains("[scanner]"));
    assert!(content.contains("min_contrast"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    style_audit!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read(".style-audit.toml"), "# existing config\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    style_audit!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".style-audit.toml").contains("[audit]"));
}

#[test]
fn generated_config_is_accepted_by_audit() {
    let fixture = TestFixture::new();
    fixture.create_file("a.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--quiet"])
        .assert()
        .success();
}
