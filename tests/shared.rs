//! Concurrent completions through a [`Shared`] summary.

use std::{thread, time::Duration};

use run_summary::{Coloring, Config, Outcome, RunSummary, Shared};
use tempfile::TempDir;

fn shared() -> Shared<Vec<u8>> {
    RunSummary::raw(Vec::new(), Config::default()).into()
}

fn outcome_of(n: usize) -> Outcome {
    Outcome::ALL[n % Outcome::ALL.len()]
}

#[test]
fn threads_never_lose_completions() {
    let summary = shared();
    summary.begin(1_000).unwrap();

    let handles = (0..10)
        .map(|worker| {
            let summary = summary.clone();
            thread::spawn(move || {
                for n in 0..100 {
                    summary
                        .record_completion(
                            format!("worker {worker} › test {n}"),
                            outcome_of(n),
                            Duration::from_millis(1),
                            Some("boom"),
                        )
                        .unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = summary.stats();
    assert_eq!(stats.completed(), 1_000);
    assert_eq!(stats.passed, 250);
    assert_eq!(stats.failed, 250);
    assert_eq!(stats.skipped, 250);
    assert_eq!(stats.flaky, 250);
    assert_eq!(summary.failures().len(), 250);
    assert_eq!(
        summary.with(|s| s.duration()),
        Duration::from_millis(1_000),
    );
}

#[test]
fn overflowing_plan_is_rejected_under_contention() {
    let summary = shared();
    summary.begin(50).unwrap();

    let handles = (0..4)
        .map(|worker| {
            let summary = summary.clone();
            thread::spawn(move || {
                (0..25)
                    .filter(|n| {
                        summary
                            .record_completion(
                                format!("{worker}-{n}"),
                                Outcome::Passed,
                                Duration::ZERO,
                                None,
                            )
                            .is_err()
                    })
                    .count()
            })
        })
        .collect::<Vec<_>>();
    let rejected = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .sum::<usize>();

    assert_eq!(rejected, 50);
    assert_eq!(summary.stats().passed, 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn tokio_tasks_share_one_summary() {
    let dir = TempDir::new().unwrap();
    let summary: Shared<Vec<u8>> = RunSummary::raw(
        Vec::new(),
        Config::default()
            .with_output_file(dir.path().join("summary.txt"))
            .with_coloring(Coloring::Never),
    )
    .into();
    summary.begin(64).unwrap();

    let tasks = (0..64)
        .map(|n| {
            let summary = summary.clone();
            tokio::spawn(async move {
                summary.record_completion(
                    format!("task {n}"),
                    outcome_of(n),
                    Duration::from_millis(10),
                    None,
                )
            })
        })
        .collect::<Vec<_>>();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let rendered = summary.finalize().unwrap_or_else(|e| {
        panic!("failed to finalize: {e}");
    });
    assert!(rendered.contains("Total:     64 tests"));
    assert!(rendered.contains("Duration:  0.6s"));
    assert!(rendered.contains("Success:   25%"));

    let summary = summary.into_inner().unwrap();
    assert_eq!(summary.failures().len(), 16);
}
