//! Re-checks every `fixtures/<name>.json` against `fixtures/<name>.ui`.
//!
//! usage: dev-test-runner [FIXTURES_DIR]   (default: ./fixtures)
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use once_cell::sync::Lazy;
use regex::Regex;

static CRLF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n").expect("valid regex"));

enum Outcome {
    Pass,
    Missing,
    Fail(String),
}

fn run_fixture(json_path: &Path) -> Outcome {
    let expected_path = json_path.with_extension("ui");
    let Ok(expected) = std::fs::read_to_string(&expected_path) else {
        return Outcome::Missing;
    };
    // fixtures may have been checked out with CRLF endings
    let expected = CRLF.replace_all(&expected, "\n");

    let source = match std::fs::read_to_string(json_path) {
        Ok(x) => x,
        Err(error) => return Outcome::Fail(format!("failed to read: {error}")),
    };
    let actual = match ui_maker::convert_document(ui_maker::fence::strip_fences(&source)) {
        Ok(x) => x,
        Err(error) => return Outcome::Fail(error.to_string()),
    };
    if actual == expected {
        return Outcome::Pass;
    }
    Outcome::Fail(first_difference(&actual, &expected))
}

fn first_difference(actual: &str, expected: &str) -> String {
    let mut actual_lines = actual.lines();
    let mut expected_lines = expected.lines();
    let mut line = 1;
    loop {
        match (actual_lines.next(), expected_lines.next()) {
            (Some(a), Some(e)) if a == e => line += 1,
            (None, None) => return "outputs differ only in line endings".to_owned(),
            (a, e) => {
                return format!(
                    "line {line}:\n    expected: {:?}\n    actual:   {:?}",
                    e.unwrap_or("<eof>"),
                    a.unwrap_or("<eof>")
                );
            }
        }
    }
}

fn fixture_inputs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fixtures"));
    let inputs = match fixture_inputs(&dir) {
        Ok(x) => x,
        Err(error) => {
            log::error!("cannot list {}: {error}", dir.display());
            return ExitCode::FAILURE;
        }
    };

    let mut failed = 0;
    for input in &inputs {
        match run_fixture(input) {
            Outcome::Pass => log::info!("✅ {}", input.display()),
            Outcome::Missing => log::warn!("⚠️  {} has no .ui counterpart", input.display()),
            Outcome::Fail(reason) => {
                failed += 1;
                log::error!("❌ {}: {reason}", input.display());
            }
        }
    }
    log::info!("{} fixture(s), {failed} failed", inputs.len());
    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
