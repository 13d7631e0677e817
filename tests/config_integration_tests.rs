//! Integration tests for the `config` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Config Validate Tests
// =============================================================================

#[test]
fn config_validate_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\ndpi = 150\n");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains(".elem-tally.toml"));
}

#[test]
fn config_validate_explicit_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", "[encoding]\ndetect = false\n");

    fixture
        .command()
        .args(["config", "validate", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_validate_without_any_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"));
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart\n");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ TomlParse:"));
}

#[test]
fn config_validate_unknown_key() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\ncolour = \"red\"\n");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("colour"));
}

#[test]
fn config_validate_semantic_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\nwidth = -3.0\n");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("chart.width"));
}

#[test]
fn config_validate_missing_explicit_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "validate", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_user_config_dir() {
    let fixture = TestFixture::new();
    fixture.create_file(".config/elem-tally/config.toml", "[chart]\ndpi = 0\n");

    // Only the XDG location is redirected into the fixture.
    if cfg!(target_os = "linux") {
        fixture
            .command()
            .args(["config", "validate"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("chart.dpi"));
    }
}

// =============================================================================
// Config Show Tests
// =============================================================================

#[test]
fn config_show_defaults_as_toml() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source: built-in defaults"))
        .stdout(predicate::str::contains("[encoding]"))
        .stdout(predicate::str::contains("preset = \"metals\""));
}

#[test]
fn config_show_json_reflects_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[symbols]\npreset = \"elements\"\n");

    let output = fixture
        .command()
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["symbols"]["preset"], "elements");
    assert_eq!(value["chart"]["dpi"], 300);
}

#[test]
fn config_show_with_explicit_config() {
    let fixture = TestFixture::new();
    fixture.create_file("alt.toml", "[output]\ncsv = \"alt.csv\"\n");

    fixture
        .command()
        .args(["-c", "alt.toml", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("csv = \"alt.csv\""));
}
