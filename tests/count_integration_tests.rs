//! Integration tests for the `count` command.

mod common;

use common::{GBK_CHINESE, SAMPLE_FORMULAS, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Console Output
// =============================================================================

#[test]
fn count_prints_per_line_tallies_and_summary() {
    let fixture = TestFixture::new();
    fixture.create_file("formulas.txt", SAMPLE_FORMULAS);

    fixture
        .command()
        .args(["count", "formulas.txt", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Line 1: {Fe: 1, Co: 1, Ni: 1, Al: 1}\nLine 2: {}\nLine 3: {Fe: 2, Co: 1}\nLine 4: {Yb: 1}\n",
        ))
        .stdout(predicate::str::contains("Global totals (sorted by count, descending):"))
        .stdout(predicate::str::contains("  Fe: 3\n  Co: 2\n"))
        .stdout(predicate::str::contains("CSV table saved to element_counts.csv"));
}

#[test]
fn count_writes_full_csv_table() {
    let fixture = TestFixture::new();
    fixture.create_file("formulas.txt", SAMPLE_FORMULAS);

    fixture
        .command()
        .args(["count", "formulas.txt", "--no-chart", "--csv", "out.csv"])
        .assert()
        .success();

    let csv = fixture.read("out.csv");
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows[0], "Element,Count");
    assert_eq!(rows[1], "Fe,3");
    assert_eq!(rows[2], "Co,2");
    // Header plus every metal, zeros included.
    assert_eq!(rows.len(), 82);
    assert!(rows.contains(&"Yb,1"));
    assert!(rows.contains(&"Au,0"));
}

#[test]
fn count_with_custom_symbols() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "FeCoFe\n");

    fixture
        .command()
        .args(["count", "in.txt", "--no-chart", "--symbols", "Fe,Co"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: {Fe: 2, Co: 1}"));

    assert_eq!(fixture.read("element_counts.csv"), "Element,Count\nFe,2\nCo,1\n");
}

#[test]
fn count_elements_preset_counts_non_metals() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "Fe2O3\n");

    fixture
        .command()
        .args(["count", "in.txt", "--no-chart", "--preset", "elements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: {Fe: 1, O: 1}"));

    assert_eq!(fixture.read("element_counts.csv").lines().count(), 119);
}

#[test]
fn count_json_format() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "FeCo\nNi\n");

    let output = fixture
        .command()
        .args(["count", "in.txt", "--no-chart", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["encoding"], "UTF-8");
    assert_eq!(value["lines"].as_array().unwrap().len(), 2);
    assert_eq!(value["total"]["occurrences"], 3);
}

#[test]
fn count_report_to_file() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "Fe\n");

    fixture
        .command()
        .args(["count", "in.txt", "--no-chart", "-o", "report.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1").not());

    assert!(fixture.read("report.txt").starts_with("Line 1: {Fe: 1}\n"));
}

#[test]
fn count_quiet_prints_nothing() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "Fe\n");

    fixture
        .command()
        .args(["-q", "count", "in.txt", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(fixture.join("element_counts.csv").exists());
}

// =============================================================================
// Encodings
// =============================================================================

#[test]
fn count_reads_gbk_input() {
    let fixture = TestFixture::new();
    let mut bytes = b"Fe".to_vec();
    bytes.extend(GBK_CHINESE);
    bytes.extend(b"Cr\n");
    fixture.create_bytes("gbk.txt", &bytes);

    fixture
        .command()
        .args(["-v", "count", "gbk.txt", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoding: GBK"))
        .stdout(predicate::str::contains("Line 1: {Fe: 1, Cr: 1}"));
}

#[test]
fn count_undetectable_encoding_fails_without_outputs() {
    let fixture = TestFixture::new();
    let mut bytes = b"Fe".to_vec();
    bytes.extend(GBK_CHINESE);
    fixture.create_bytes("gbk.txt", &bytes);

    fixture
        .command()
        .args(["count", "gbk.txt", "--encodings", "utf-8", "--no-detect"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ Encoding:"))
        .stderr(predicate::str::contains("tried: UTF-8"));

    assert!(!fixture.join("element_counts.csv").exists());
    assert!(!fixture.join("element_counts.png").exists());
}

#[test]
fn count_unknown_encoding_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "Fe\n");

    fixture
        .command()
        .args(["count", "in.txt", "--encodings", "not-an-encoding"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not-an-encoding"));
}

// =============================================================================
// Chart & Errors
// =============================================================================

#[test]
fn count_empty_input_skips_chart() {
    let fixture = TestFixture::new();
    fixture.create_file("empty.txt", "");

    fixture
        .command()
        .args(["count", "empty.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No elements with count >= 1."))
        .stdout(predicate::str::contains("chart not generated"));

    assert!(!fixture.join("element_counts.png").exists());
    let csv = fixture.read("element_counts.csv");
    assert_eq!(csv.lines().count(), 82);
    assert_eq!(csv.lines().nth(1), Some("Mg,0"));
}

#[test]
fn count_missing_font_is_runtime_error_after_csv() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "Fe\n");
    fixture.create_config("[chart]\nfont = \"no-such-font.ttf\"\n");

    fixture
        .command()
        .args(["count", "in.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ Chart:"))
        .stderr(predicate::str::contains("no-such-font.ttf"));

    assert!(fixture.join("element_counts.csv").exists());
}

#[test]
fn count_missing_input_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["count", "absent.txt", "--no-chart"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn count_invalid_symbol_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "Fe\n");

    fixture
        .command()
        .args(["count", "in.txt", "--symbols", "Fe,Abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Abc"));
}

#[test]
fn count_uses_local_config() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "FeCo\n");
    fixture.create_config("[symbols]\nlist = [\"Co\"]\n\n[output]\ncsv = \"cfg.csv\"\n");

    fixture
        .command()
        .args(["count", "in.txt", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: {Co: 1}"));

    assert_eq!(fixture.read("cfg.csv"), "Element,Count\nCo,1\n");
}

#[test]
fn count_no_config_ignores_local_config() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "FeCo\n");
    fixture.create_config("[symbols]\nlist = [\"Co\"]\n");

    fixture
        .command()
        .args(["--no-config", "count", "in.txt", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: {Fe: 1, Co: 1}"));
}

#[test]
fn count_rejects_dpi_out_of_range() {
    let fixture = TestFixture::new();
    fixture.create_file("in.txt", "Fe\n");

    fixture
        .command()
        .args(["count", "in.txt", "--dpi", "0"])
        .assert()
        .code(2);
}
