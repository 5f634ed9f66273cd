//! End-to-end runs of the `verity` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const FORM: &str = r#"
[[fields]]
name = "email"

[[fields.rules]]
rule = "required"

[[fields.rules]]
rule = "is_email"

[[fields]]
name = "postcode"

[[fields.rules]]
rule = "is_postal_code"
country = "NL"
nil_response = true
"#;

/// The binary, run in an empty directory with no verity variables set.
fn verity(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.current_dir(dir)
        .env_remove("VERITY_JSON")
        .env_remove("VERITY_LOG_LEVEL")
        .env_remove("VERITY_LOG_FORMAT");
    cmd
}

fn form_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("signup.toml");
    fs::write(&path, FORM).unwrap();
    path
}

// ============================================================================
// CHECK
// ============================================================================

#[test]
fn check_accepts_valid_value() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["check", "min_length", "-p", "length=8", "long enough"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn check_reports_invalid_value() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["check", "min_length", "--param", "length=8", "--tag", "password", "short"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[password] must be at least 8 characters long",
        ));
}

#[test]
fn check_nil_response_accepts_absent_value() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["check", "is_email", "--nil-response"])
        .assert()
        .success();
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    let output = verity(dir.path())
        .args(["--json", "check", "is_in", "-p", r#"values=["red","green"]"#, "blue"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"], "invalid");
    assert_eq!(report["value"], "blue");
    assert_eq!(report["error"]["code"], "is_in");
}

#[test]
fn check_unknown_rule_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["check", "is_shiny", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot build rule `is_shiny`"));
}

// ============================================================================
// FORM
// ============================================================================

#[test]
fn form_all_valid() {
    let dir = TempDir::new().unwrap();
    let file = form_file(&dir);
    verity(dir.path())
        .arg("form")
        .arg(&file)
        .args(["--set", "email=ada@example.com", "--set", "postcode=1234 AB"])
        .assert()
        .success()
        .stdout("email: valid\npostcode: valid\n");
}

#[test]
fn form_invalid_field_fails() {
    let dir = TempDir::new().unwrap();
    let file = form_file(&dir);
    verity(dir.path())
        .arg("form")
        .arg(&file)
        .args(["--set", "email=not-an-email"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("email: invalid: [email]"))
        .stdout(predicate::str::contains("postcode: valid"));
}

#[test]
fn form_json_lists_every_field() {
    let dir = TempDir::new().unwrap();
    let file = form_file(&dir);
    let output = verity(dir.path())
        .arg("form")
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let reports: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let fields: Vec<_> = reports
        .iter()
        .map(|r| (r["field"].as_str().unwrap(), r["outcome"].as_str().unwrap()))
        .collect();
    assert_eq!(fields, [("email", "invalid"), ("postcode", "valid")]);
}

#[test]
fn form_unknown_field_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let file = form_file(&dir);
    verity(dir.path())
        .arg("form")
        .arg(&file)
        .args(["--set", "phone=123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("phone"));
}

#[test]
fn form_missing_file() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["form", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read nope.toml"));
}

// ============================================================================
// DEMO
// ============================================================================

#[test]
fn demo_submits_valid_form() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args([
            "demo",
            "--email",
            "ada@example.com",
            "--password",
            "correct horse",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("password: *************"))
        .stdout(predicate::str::contains("submitted: ada@example.com"));
}

#[test]
fn demo_short_password_is_not_submitted() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["demo", "--email", "ada@example.com", "--password", "short"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[password] must be at least 8 characters long"))
        .stdout(predicate::str::contains("submit disabled"));
}

#[test]
fn demo_untouched_fields_show_no_errors() {
    let dir = TempDir::new().unwrap();
    let output = verity(dir.path()).args(["--json", "demo"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["is_valid"], false);
    assert_eq!(summary["submitted"], serde_json::Value::Null);
    for field in summary["fields"].as_array().unwrap() {
        assert_eq!(field["has_errors"], false);
    }
}

// ============================================================================
// SETTINGS
// ============================================================================

#[test]
fn settings_file_enables_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("verity.toml"), "json = true\n").unwrap();
    verity(dir.path())
        .args(["check", "required", "x"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn environment_overrides_settings_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("verity.toml"), "json = true\n").unwrap();
    verity(dir.path())
        .env("VERITY_JSON", "false")
        .args(["check", "required", "x"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["--config", "missing.toml", "check", "required", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn debug_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    verity(dir.path())
        .args(["--log-level", "debug", "check", "required", "x"])
        .assert()
        .success()
        .stdout("valid\n")
        .stderr(predicate::str::contains("rule checked"));
}
