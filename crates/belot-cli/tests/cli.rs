use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const REPORT: &str = "=== BELOT CARD CALCULATOR ===
Cards: 0


POINTS BY TRUMP SUIT:
Verde (♠): 30 points
Roșu (♥): 41 points
Dobă (♦): 77 points
Cruce (♣): 12 points

";

fn belot(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("belot").expect("binary built");
    cmd.current_dir(dir).env("RUST_LOG", "off");
    cmd
}

#[test]
fn score_prints_result_card() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.txt"), REPORT).unwrap();

    belot(dir.path())
        .args(["score", "--report", "report.txt", "--trump", "Dobă", "--combinations", "Bella"])
        .assert()
        .success()
        .stdout(predicate::str::contains("97 puncte"))
        .stdout(predicate::str::contains("Coz: Dobă (77) + Bella: +20 = 97"));
}

#[test]
fn score_reads_report_from_stdin_and_emits_json() {
    let dir = tempdir().unwrap();

    belot(dir.path())
        .args(["score", "--report", "-", "--trump", "Cozul: Rosu", "--json"])
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 41"))
        .stdout(predicate::str::contains("\"trump_name\": \"Rosu\""));
}

#[test]
fn score_rejects_unknown_trump() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.txt"), REPORT).unwrap();

    belot(dir.path())
        .args(["score", "--report", "report.txt", "--trump", "Spades"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not determine trump suit"));
}

#[test]
fn report_renders_calculator_block() {
    let dir = tempdir().unwrap();

    belot(dir.path())
        .args(["report", "--cards", "J♦ 9♦ A♠"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== BELOT CARD CALCULATOR ==="))
        .stdout(predicate::str::contains("Dobă (♦): 45 points"));
}

#[test]
fn watch_runs_pipeline_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("clipboard.txt"), REPORT).unwrap();
    fs::write(dir.path().join("coz.txt"), "Cozul: Cruce").unwrap();
    fs::write(dir.path().join("comb.txt"), "Tărț").unwrap();
    fs::write(
        dir.path().join("belot.yaml"),
        r#"
run_id: "cli_smoke"
clipboard:
  path: "clipboard.txt"
  poll_interval_ms: 10
  timeout_ms: 500
page:
  trump_label_path: "coz.txt"
  combinations_path: "comb.txt"
outputs:
  result_json: "out/{run_id}/result.json"
"#,
    )
    .unwrap();

    belot(dir.path())
        .arg("watch")
        .assert()
        .success()
        .stdout(predicate::str::contains("32 puncte"))
        .stdout(predicate::str::contains("Coz: Cruce (12) + Tărț: +20 = 32"));

    let saved = fs::read_to_string(dir.path().join("out/cli_smoke/result.json")).unwrap();
    assert!(saved.contains("\"score\": 32"));
}

#[test]
fn watch_validate_only_skips_pipeline() {
    let dir = tempdir().unwrap();

    belot(dir.path())
        .args(["watch", "--validate-only", "--run-id", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded configuration 'check'"))
        .stdout(predicate::str::contains("Validation-only mode"));
}

#[test]
fn validate_only_applies_to_any_command() {
    let dir = tempdir().unwrap();

    belot(dir.path())
        .args(["--validate-only", "report", "--cards", "J♦ 9♦"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation-only mode"))
        .stdout(predicate::str::contains("BELOT CARD CALCULATOR").not());
}
