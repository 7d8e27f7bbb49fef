//! Rewrite `tests/golden/*/expected_report.json` from each `input.hex`.
//!
//! Run from the workspace root. Reports are written pretty-printed with the
//! input path stored relative to the root so fixtures stay portable.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use polowire_core::analyze_frame_file;

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    let mut cases = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if path.is_dir() && path.join("input.hex").exists() {
            cases.push(path);
        }
    }
    cases.sort();

    for case in cases {
        regenerate_one(&case.join("input.hex"), &case.join("expected_report.json"))?;
        println!("regenerated {}", case.display());
    }

    Ok(())
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let mut report = analyze_frame_file(input)
        .map_err(|err| format!("analysis failed for {}: {}", input.display(), err))?;
    report.input.path = input
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let mut json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    json.push('\n');
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
