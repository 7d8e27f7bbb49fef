use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("polowire"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden_capture(case: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("input.hex")
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_supports_decode_aliases() {
    for name in ["decode", "analyze", "analyse"] {
        cmd()
            .arg("capture")
            .arg(name)
            .arg("--help")
            .assert()
            .success();
    }
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.hex");
    let report = temp.path().join("report.json");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture.bin");
    std::fs::write(&input, "4131").expect("write capture");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("unsupported input format"));
}

#[test]
fn stdout_outputs_report_json() {
    let assert = cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("match"))
        .arg("--stdout")
        .assert()
        .success();
    let report = stdout_json(&assert);
    assert_eq!(report["tool"]["name"], "polowire");
    assert_eq!(report["capture_summary"]["events_total"], 14);
    assert_eq!(report["final_state"]["score"]["home"], 1);
}

#[test]
fn glob_matching_one_file_is_accepted() {
    let pattern = repo_root()
        .join("tests")
        .join("golden")
        .join("m*")
        .join("input.hex");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .success();
}

#[test]
fn glob_matching_many_files_is_rejected() {
    let pattern = repo_root()
        .join("tests")
        .join("golden")
        .join("*")
        .join("input.hex");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("match"))
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("match"))
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn report_is_written_to_nested_path() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("match"))
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let written = std::fs::read_to_string(&report).expect("report written");
    let value: Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(value["report_version"], 1);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("match"))
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn list_issues_outputs_lines() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("errors"))
        .arg("-o")
        .arg(report)
        .arg("--list-issues")
        .assert()
        .success()
        .stderr(
            contains("Issues:")
                .and(contains("line 4 encoding (error)"))
                .and(contains("line 6 skipped (warning)")),
        );
}

#[test]
fn strict_fails_when_issues_present() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("errors"))
        .arg("-o")
        .arg(&report)
        .arg("--strict")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("7 frame(s) rejected or skipped"));

    assert!(report.exists());
}

#[test]
fn strict_passes_on_clean_capture() {
    cmd()
        .arg("capture")
        .arg("decode")
        .arg(golden_capture("match"))
        .arg("--stdout")
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn frame_prints_decoded_event() {
    let assert = cmd()
        .arg("frame")
        .arg("4131171601303034323130303031350230373134")
        .assert()
        .success();
    let output = stdout_json(&assert);
    assert_eq!(output["frame"]["message_id"], "A1");
    assert_eq!(output["frame"]["message_type"], "0042100015");
    assert_eq!(output["event"]["score"]["home"], 7);
    assert_eq!(output["event"]["score"]["away"], 14);
}

#[test]
fn frame_accepts_spaced_hex() {
    let assert = cmd()
        .arg("frame")
        .arg("41 31 17 16 01 30 30 34 32 31 30 30 30 37 37 02 4c 4f 47 4f")
        .assert()
        .success();
    let output = stdout_json(&assert);
    assert_eq!(output["event"]["unknown"]["payload"], "LOGO");
}

#[test]
fn frame_reports_payload_error() {
    cmd()
        .arg("frame")
        .arg("4131171601303034323130303031350230377834")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid away score").and(contains("hint:")));
}

#[test]
fn frame_rejects_bad_hex() {
    cmd()
        .arg("frame")
        .arg("41zz")
        .assert()
        .failure()
        .stderr(contains("invalid frame hex"));
}
