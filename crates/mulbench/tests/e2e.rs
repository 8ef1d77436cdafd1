//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn mulbench() -> Command {
    Command::cargo_bin("mulbench").expect("binary not found")
}

#[test]
fn help_flag() {
    mulbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiplication"));
}

#[test]
fn version_flag() {
    mulbench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mulbench"));
}

#[test]
fn matrix_suite_runs_both_kernels() {
    mulbench()
        .args([
            "--suite", "matrix", "--sizes", "2,3", "--trials", "2", "--warmup", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Naive"))
        .stdout(predicate::str::contains("Strassen"));
}

#[test]
fn matrix_suite_single_kernel() {
    mulbench()
        .args([
            "--suite", "matrix", "--kernel", "strassen", "--sizes", "2", "--trials", "1",
            "--warmup", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strassen"))
        .stdout(predicate::str::contains("Naive").not());
}

#[test]
fn decimal_suite_runs() {
    mulbench()
        .args([
            "--suite", "decimal", "--digits", "4,8", "--trials", "2", "--warmup", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Decimal"));
}

#[test]
fn quiet_mode_prints_nothing() {
    mulbench()
        .args([
            "--sizes", "2", "--digits", "3", "--trials", "1", "--warmup", "1", "-q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verify_mode() {
    mulbench()
        .args([
            "--sizes", "2,3", "--digits", "4", "--trials", "1", "--warmup", "1", "--verify",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cross-validated"));
}

#[test]
fn verbose_mode_shows_spread() {
    mulbench()
        .args([
            "--suite", "matrix", "--sizes", "2", "--trials", "1", "--warmup", "1", "-v",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Min"))
        .stdout(predicate::str::contains("Max"));
}

#[test]
fn unknown_kernel_exits_with_config_code() {
    mulbench()
        .args(["--suite", "matrix", "--kernel", "karatsuba", "--sizes", "2"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_suite_exits_with_config_code() {
    mulbench().args(["--suite", "cubic"]).assert().failure().code(4);
}

#[test]
fn inverted_entry_range_exits_with_config_code() {
    mulbench()
        .args([
            "--suite", "matrix", "--sizes", "2", "--entry-min", "5", "--entry-max", "1",
        ])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn json_report_is_written() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("report.json");
    mulbench()
        .args([
            "--sizes",
            "2",
            "--digits",
            "3",
            "--trials",
            "1",
            "--warmup",
            "1",
            "-q",
            "--json",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["version"], 1);
    assert_eq!(report["seed"], 42);
    let measurements = report["measurements"].as_array().unwrap();
    // 2 matrix kernels at one size + 1 decimal length
    assert_eq!(measurements.len(), 3);
}

#[test]
fn baseline_comparison() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("baseline.json");
    let common = [
        "--suite", "matrix", "--sizes", "2", "--trials", "1", "--warmup", "1",
    ];

    mulbench()
        .args(common)
        .args(["-q", "--json", path.to_str().unwrap()])
        .assert()
        .success();

    mulbench()
        .args(common)
        .args(["--baseline", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Baseline comparison"));
}

#[test]
fn missing_baseline_fails() {
    mulbench()
        .args([
            "--suite", "matrix", "--sizes", "2", "--trials", "1", "--warmup", "1",
            "--baseline", "/nonexistent/baseline.json",
        ])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn shell_completion_bash() {
    mulbench()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mulbench"));
}

#[test]
fn shell_completion_zsh() {
    mulbench()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mulbench"));
}

#[test]
fn env_var_seed_lands_in_report() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("report.json");
    mulbench()
        .env("MULBENCH_SEED", "7")
        .args([
            "--suite",
            "decimal",
            "--digits",
            "3",
            "--trials",
            "1",
            "--warmup",
            "1",
            "-q",
            "--json",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["seed"], 7);
}
