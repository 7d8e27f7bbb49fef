use std::fs;
use std::path::Path;

use polowire_core::{Report, ScoreboardEvent, analyze_frame_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.hex");
    let expected = load_expected_report(dir);

    let mut actual = analyze_frame_file(&input).expect("analyze capture");
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(&actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
    actual
}

#[test]
fn golden_match() {
    run_golden("tests/golden/match");
}

#[test]
fn golden_errors() {
    run_golden("tests/golden/errors");
}

#[test]
fn golden_match_final_state() {
    let report = load_expected_report("tests/golden/match");
    let state = &report.final_state;
    assert_eq!(state.game_time, Some(405));
    assert_eq!(state.period, Some(1));
    assert_eq!(state.home.timers.get(&5), Some(&19));
    assert_eq!(state.home.timers.get(&12), Some(&18));
    assert_eq!(state.away.counts.get(&3), Some(&1));
    assert_eq!(state.unknown_messages, 1);
}

#[test]
fn golden_match_keeps_unknown_payload_raw() {
    let report = load_expected_report("tests/golden/match");
    let unknown = report
        .events
        .iter()
        .find(|record| record.event.kind().is_none())
        .expect("unknown event");
    assert_eq!(
        unknown.event,
        ScoreboardEvent::Unknown {
            message_type: "0042100077".to_string(),
            payload: "LOGO 1".to_string(),
        }
    );
}

#[test]
fn golden_errors_classifies_issues() {
    let report = load_expected_report("tests/golden/errors");
    let kinds: Vec<_> = report.issues.iter().map(|issue| issue.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["frame", "encoding", "payload", "skipped", "payload", "payload", "frame"]
    );
    let summary = report.capture_summary.expect("capture summary");
    assert_eq!(summary.frames_total, 9);
    assert_eq!(summary.events_total, 2);
}
