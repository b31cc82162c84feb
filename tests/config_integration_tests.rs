//! Integration tests for configuration loading.

mod common;

use common::{HARDCODED_MARGIN, INVISIBLE_TEXT, TestFixture};
use predicates::prelude::*;

#[test]
fn local_config_excludes_files() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\ngitignore = false\nexclude = [\"vendor/**\"]\n");
    fixture.create_file("vendor/theme.css", INVISIBLE_TEXT);
    fixture.create_file("site.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vendor/theme.css").not());
}

#[test]
fn no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[color]\nmin_contrast = 1.0\n");
    fixture.create_file("card.css", ".card { color: #777777; background-color: #888888; }\n");

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit"])
        .assert()
        .success();

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config"])
        .assert()
        .code(1);
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("ci/strict.toml", "[color]\nmin_contrast = 7.0\n");
    fixture.create_file("card.css", ".card { color: #767676; background-color: #ffffff; }\n");

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--no-config"])
        .assert()
        .success();

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit", "--config", "ci/strict.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("color/low-contrast"));
}

#[test]
fn unsupported_version_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_config("version = \"9\"\n");
    fixture.create_file("a.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported config version"));
}

#[test]
fn invalid_toml_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner\n");
    fixture.create_file("a.css", HARDCODED_MARGIN);

    style_audit!()
        .current_dir(fixture.path())
        .args(["audit"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML parse error"));
}
