// crates/formcheck-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Integration tests driving the formcheck binary.
// Purpose: Ensure commands print localized results and exit codes.
// Dependencies: formcheck-cli binary, formcheck-config, tempfile
// ============================================================================
//! ## Overview
//! Runs the `formcheck` binary in an isolated working directory with the
//! locale and config environment variables cleared.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use formcheck_config::FormcheckConfig;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn formcheck_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_formcheck"))
}

fn run_in(dir: &Path, args: &[&str], lang: Option<&str>) -> Output {
    let mut command = Command::new(formcheck_bin());
    command
        .args(args)
        .current_dir(dir)
        .env_remove("FORMCHECK_LANG")
        .env_remove("FORMCHECK_CONFIG");
    if let Some(lang) = lang {
        command.env("FORMCHECK_LANG", lang);
    }
    command.output().expect("run formcheck")
}

fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("temp dir");
    run_in(dir.path(), args, None)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_config(dir: &Path, content: &str) -> String {
    let path = dir.join("formcheck.toml");
    fs::write(&path, content).expect("write config");
    path.to_string_lossy().into_owned()
}

// ============================================================================
// SECTION: Card and Message Commands
// ============================================================================

#[test]
fn card_reports_valid_number() {
    let output = run(&["card", "4532 0151 1283 0366"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Valid card number.\n");
}

#[test]
fn card_reports_invalid_number_with_failure_code() {
    let output = run(&["card", "4532015112830367"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "Invalid card number.\n");
}

#[test]
fn message_resolves_in_requested_locale() {
    let output = run(&["message", "required", "--locale", "fr"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Ce champ est obligatoire\n");
}

#[test]
fn message_embeds_count_and_list_params() {
    let count = run(&["message", "file.tooLarge", "--count", "10", "--locale", "fr"]);
    assert_eq!(stdout(&count), "Le fichier doit faire moins de 10 Mo\n");
    let list = run(&["message", "file.invalidType", "--types", "image/png,image/gif"]);
    assert_eq!(stdout(&list), "File type must be one of: image/png, image/gif\n");
}

#[test]
fn message_unknown_key_prints_empty_line() {
    let output = run(&["message", "unknownKey"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn message_misses_reach_stderr_when_configured() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_config(dir.path(), "[diagnostics]\nmissing_messages = \"stderr\"\n");
    let output = run_in(dir.path(), &["message", "requried", "--config", &config], None);
    assert_eq!(stdout(&output), "\n");
    let log = stderr(&output);
    assert!(log.contains("\"event\":\"message_miss\""), "unexpected stderr: {log}");
    assert!(log.contains("\"kind\":\"unknown_key\""), "unexpected stderr: {log}");
}

// ============================================================================
// SECTION: Check and File Commands
// ============================================================================

#[test]
fn check_prints_localized_failure() {
    let english = run(&["check", "email", "not-an-email"]);
    assert!(!english.status.success());
    assert_eq!(stdout(&english), "Please enter a valid email address\n");

    let french = run(&["--lang", "fr", "check", "email", "not-an-email"]);
    assert_eq!(stdout(&french), "Veuillez saisir une adresse e-mail valide\n");
}

#[test]
fn check_requires_a_value() {
    let output = run(&["check", "phone", ""]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "This field is required\n");
}

#[test]
fn check_postal_honors_country_flag() {
    let output = run(&["check", "postal", "K1A 0B1", "--country", "ca"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "OK\n");
    let output = run(&["check", "postal", "K1A 0B1"]);
    assert!(!output.status.success());
}

#[test]
fn check_password_reports_rule_and_strength() {
    let output = run(&["check", "password", "abc"]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Password must be at least 8 characters\nPassword strength: weak\n"
    );
}

#[test]
fn check_password_strength_follows_configured_length() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_config(dir.path(), "[password]\nmin_length = 12\n");
    let output = run_in(dir.path(), &["check", "password", "Abcdef1!x", "--config", &config], None);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Password must be at least 12 characters\nPassword strength: fair\n"
    );
}

#[test]
fn file_uses_configured_constraints() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_config(
        dir.path(),
        "[file]\nmax_size_mb = 1\nallowed_types = [\"application/pdf\"]\n",
    );
    let wrong_type = run_in(
        dir.path(),
        &["file", "photo.png", "--size", "100", "--type", "image/png", "--config", &config],
        None,
    );
    assert!(!wrong_type.status.success());
    assert_eq!(stdout(&wrong_type), "File type must be one of: application/pdf\n");

    let too_large = run_in(
        dir.path(),
        &["file", "doc.pdf", "--size", "2097152", "--type", "application/pdf", "--config", &config],
        None,
    );
    assert_eq!(stdout(&too_large), "File must be smaller than 1MB\n");

    let ok = run_in(
        dir.path(),
        &["file", "doc.pdf", "--size", "100", "--type", "application/pdf", "--config", &config],
        None,
    );
    assert!(ok.status.success());
}

#[test]
fn config_default_locale_applies_to_messages() {
    let dir = TempDir::new().expect("temp dir");
    write_config(dir.path(), "[locale]\ndefault = \"fr\"\n");
    let output = run_in(dir.path(), &["check", "email", "bad"], None);
    assert_eq!(stdout(&output), "Veuillez saisir une adresse e-mail valide\n");
}

// ============================================================================
// SECTION: Interpolate Command
// ============================================================================

#[test]
fn interpolate_substitutes_known_tokens_only() {
    let output = run(&["interpolate", "/users/{id}/posts/{post}", "--var", "id=42"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/users/42/posts/{post}\n");
}

#[test]
fn interpolate_rejects_malformed_var() {
    let output = run(&["interpolate", "/users/{id}", "--var", "id"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid --var value id"));
}

// ============================================================================
// SECTION: Config Commands and Locale Selection
// ============================================================================

#[test]
fn config_validate_accepts_valid_config() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_config(dir.path(), "[password]\nmin_length = 10\n");
    let output = run_in(dir.path(), &["config", "validate", "--config", &config], None);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Config valid"));
}

#[test]
fn config_validate_rejects_invalid_limits() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_config(dir.path(), "[password]\nmin_length = 0\n");
    let output = run_in(dir.path(), &["config", "validate", "--config", &config], None);
    assert!(!output.status.success());
    let log = stderr(&output);
    assert!(log.contains("Failed to load config"), "unexpected stderr: {log}");
    assert!(log.contains("password.min_length"), "unexpected stderr: {log}");
}

#[test]
fn config_validate_requires_a_file() {
    let output = run(&["config", "validate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("config io error"));
}

#[test]
fn config_example_round_trips() {
    let output = run(&["config", "example"]);
    assert!(output.status.success());
    FormcheckConfig::from_toml_str(&stdout(&output)).expect("example parses");
}

#[test]
fn broken_config_does_not_block_card_checks() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_config(dir.path(), "[unknown]\n");
    let output =
        run_in(dir.path(), &["card", "4532015112830366", "--config", &config], None);
    assert!(output.status.success());
}

#[test]
fn invalid_lang_env_fails_closed() {
    let dir = TempDir::new().expect("temp dir");
    let output = run_in(dir.path(), &["card", "4532015112830366"], Some("de"));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid value for FORMCHECK_LANG"));
}

#[test]
fn lang_env_selects_french_output() {
    let dir = TempDir::new().expect("temp dir");
    let output = run_in(dir.path(), &["card", "4532015112830366"], Some("fr-FR"));
    assert_eq!(stdout(&output), "Numéro de carte valide.\n");
}

#[test]
fn version_flag_prints_package_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("formcheck "));
}
