//! Driving a [`RunSummary`] through the JSON-lines event protocol.

use std::{fs, io::Cursor};

use run_summary::{replay, Coloring, Config, ReplayError, RunSummary, UsageError};
use tempfile::TempDir;

fn summary(dir: &TempDir) -> RunSummary<Vec<u8>> {
    RunSummary::raw(
        Vec::new(),
        Config::default()
            .with_output_file(dir.path().join("out").join("summary.txt"))
            .with_coloring(Coloring::Never),
    )
}

const RUN: &str = r#"
{"event":"begin","total":3}
{"event":"completion","test":"A","outcome":"passed","duration_ms":100}
{"event":"completion","title_path":["login.spec.ts","Login","B"],"outcome":"failed","duration_ms":200,"error":"AssertionError: expected true\nstack..."}

{"event":"completion","test":"C","outcome":"skipped"}
{"event":"end"}
"#;

#[test]
fn replays_full_run() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let rendered = replay(Cursor::new(RUN), &mut summary).unwrap();

    assert!(rendered.contains("Passed:  1"));
    assert!(rendered.contains("Failed:  1"));
    assert!(rendered.contains("Skipped: 1"));
    assert!(rendered.contains("Success:   33%"));
    assert!(rendered.contains(
        "❌ login.spec.ts › Login › B\n   AssertionError: expected true\n",
    ));
    assert!(!rendered.contains("stack..."));
    assert_eq!(
        fs::read_to_string(dir.path().join("out").join("summary.txt")).unwrap(),
        rendered,
    );
}

#[test]
fn finalizes_without_end_event() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let rendered = replay(
        Cursor::new(r#"{"event":"begin","total":2}"#),
        &mut summary,
    )
    .unwrap();

    assert!(rendered.contains("Total:     2 tests"));
    assert!(rendered.contains("Success:   0%"));
}

#[test]
fn reports_malformed_line_number() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let err = replay(
        Cursor::new("{\"event\":\"begin\",\"total\":1}\n\n{\"event\":"),
        &mut summary,
    )
    .unwrap_err();

    assert!(matches!(err, ReplayError::Parse { line: 3, .. }), "{err}");
    assert_eq!(summary.planned(), Some(1));
}

#[test]
fn unknown_outcome_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let err = replay(
        Cursor::new(
            "{\"event\":\"begin\",\"total\":1}\n\
             {\"event\":\"completion\",\"test\":\"A\",\"outcome\":\"timedOut\"}",
        ),
        &mut summary,
    )
    .unwrap_err();

    assert_eq!(err.usage(), Some(&UsageError::unknown_outcome("timedOut")));
    assert!(summary.stats().is_empty());
}

#[test]
fn completion_before_begin_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let err = replay(
        Cursor::new(r#"{"event":"completion","test":"A","outcome":"passed"}"#),
        &mut summary,
    )
    .unwrap_err();

    assert_eq!(err.usage(), Some(&UsageError::NotStarted));
}

#[test]
fn events_after_end_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let err = replay(
        Cursor::new(
            "{\"event\":\"begin\",\"total\":1}\n\
             {\"event\":\"end\"}\n\
             {\"event\":\"completion\",\"test\":\"late\",\"outcome\":\"passed\"}",
        ),
        &mut summary,
    )
    .unwrap_err();

    assert_eq!(err.usage(), Some(&UsageError::AlreadyFinalized));
    assert!(summary.stats().is_empty());
}

#[test]
fn too_many_completions_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let err = replay(
        Cursor::new(
            "{\"event\":\"begin\",\"total\":1}\n\
             {\"event\":\"completion\",\"test\":\"A\",\"outcome\":\"passed\"}\n\
             {\"event\":\"completion\",\"test\":\"B\",\"outcome\":\"passed\"}",
        ),
        &mut summary,
    )
    .unwrap_err();

    assert_eq!(err.usage(), Some(&UsageError::too_many_completions(1)));
    assert_eq!(summary.stats().passed, 1);
}

#[test]
fn huge_durations_saturate() {
    let dir = TempDir::new().unwrap();
    let mut summary = summary(&dir);

    let begin = r#"{"event":"begin","total":1100}"#.to_owned();
    let events = std::iter::once(begin)
        .chain((0..1_100).map(|n| {
            serde_json::json!({
                "event": "completion",
                "test": format!("t{n}"),
                "outcome": "passed",
                "duration_ms": u64::MAX,
            })
            .to_string()
        }))
        .collect::<Vec<_>>()
        .join("\n");

    let rendered = replay(Cursor::new(events), &mut summary).unwrap();

    assert!(rendered.contains("Success:   100%"));
    assert_eq!(summary.stats().passed, 1_100);
    assert_eq!(summary.duration(), std::time::Duration::MAX);
}
