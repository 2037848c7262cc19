// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Aggregation of test outcomes into a run summary.

use std::{fs, io, path::Path, time::Duration};

use crate::{
    error::{OutputError, OutputTarget, UsageError, UsageResult},
    render::Report,
    style::Styles,
    Config, Outcome, Stats,
};

/// Message recorded for a failed test case that reported no error message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failed test case captured for the `FAILURES` section of a summary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Failure {
    /// Identifier of the failed test case.
    pub test: String,

    /// First line of the reported error message.
    pub message: String,
}

/// Accumulator of a single test run.
///
/// Driven by a runner along a single timeline:
/// 1. [`RunSummary::begin()`] once, with the number of planned test cases;
/// 2. [`RunSummary::record_completion()`] once per finished test case, in any
///    order;
/// 3. [`RunSummary::finalize()`] once the last test case finished.
///
/// Recording performs no I/O. Finalizing renders a [`Report`], writes it into
/// the `Out`put (prefixed by a blank line) and persists it into
/// [`Config::output_file`].
///
/// If completions come from several concurrent workers, wrap the summary into
/// a [`Shared`] handle.
///
/// ```rust,no_run
/// # use std::time::Duration;
/// # use run_summary::{Config, Outcome, RunSummary};
/// let mut summary = RunSummary::new(Config::default());
/// summary.begin(2)?;
/// summary.record_completion("login › works", Outcome::Passed, Duration::from_millis(830), None)?;
/// summary.record_completion(
///     "login › rejects bad password",
///     Outcome::Failed,
///     Duration::from_millis(1_210),
///     Some("Error: expect(received).toBeVisible()\n    at LoginPage.ts:42"),
/// )?;
/// let report = summary.finalize()?;
/// assert!(report.contains("Success:   50%"));
/// # Ok::<_, run_summary::Error>(())
/// ```
///
/// [`Shared`]: crate::Shared
#[derive(Debug)]
pub struct RunSummary<Out = io::Stdout> {
    /// Output the console copy of a summary is written into.
    output: Out,

    /// Immutable configuration of this run.
    config: Config,

    /// Number of test cases planned by the runner, once the run began.
    planned: Option<usize>,

    /// Outcome counters.
    stats: Stats,

    /// Sum of the reported durations of all the completed test cases.
    duration: Duration,

    /// Captured failures, in completion order.
    failures: Vec<Failure>,
}

impl RunSummary {
    /// Creates a new [`RunSummary`] writing its console copy to
    /// [`io::Stdout`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::raw(io::stdout(), config)
    }
}

impl<Out> RunSummary<Out> {
    /// Creates a new [`RunSummary`] writing its console copy to the given
    /// `output`.
    #[must_use]
    pub const fn raw(output: Out, config: Config) -> Self {
        Self {
            output,
            config,
            planned: None,
            stats: Stats::new(),
            duration: Duration::ZERO,
            failures: Vec::new(),
        }
    }

    /// Records the number of test cases planned for this run.
    ///
    /// # Errors
    ///
    /// [`UsageError::AlreadyStarted`] if the run has already begun.
    pub fn begin(&mut self, planned: usize) -> UsageResult<()> {
        if self.planned.is_some() {
            return Err(usage(UsageError::AlreadyStarted));
        }
        self.planned = Some(planned);
        tracing::debug!(planned, "test run began");
        Ok(())
    }

    /// Records a single completed test case.
    ///
    /// Only the first line of an `error` message is kept. A failed test case
    /// without a message is recorded with [`UNKNOWN_ERROR`]. Failures aren't
    /// captured at all if [`Config::show_errors`] is off, but are still
    /// counted. The total duration saturates at [`Duration::MAX`].
    ///
    /// # Errors
    ///
    /// - [`UsageError::NotStarted`] if the run hasn't begun yet;
    /// - [`UsageError::TooManyCompletions`] if all the planned test cases
    ///   have already completed.
    ///
    /// Nothing is recorded on error.
    pub fn record_completion(
        &mut self,
        test: impl Into<String>,
        outcome: Outcome,
        duration: Duration,
        error: Option<&str>,
    ) -> UsageResult<()> {
        let planned = self.planned.ok_or_else(|| usage(UsageError::NotStarted))?;
        if self.stats.completed() >= planned {
            return Err(usage(UsageError::too_many_completions(planned)));
        }

        let test = test.into();
        tracing::trace!(%test, %outcome, ?duration, "test completed");

        self.duration = self.duration.saturating_add(duration);
        self.stats.record(outcome);
        if outcome.is_failed() && self.config.show_errors {
            let message = error
                .map(first_line)
                .filter(|m| !m.is_empty())
                .unwrap_or(UNKNOWN_ERROR);
            self.failures.push(Failure {
                test,
                message: message.to_owned(),
            });
        }
        Ok(())
    }

    /// Renders the current state of this [`RunSummary`] without any I/O.
    #[must_use]
    pub fn render(&self) -> Report {
        Report::new(self)
    }

    /// Returns the [`Config`] of this run.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of planned test cases, if the run has begun.
    #[must_use]
    pub const fn planned(&self) -> Option<usize> {
        self.planned
    }

    /// Returns the outcome counters.
    ///
    /// Counters don't depend on [`Config`] toggles: a hidden counter is still
    /// counted.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns the sum of the reported durations.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the captured [`Failure`]s, in completion order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns the `Out`put of this [`RunSummary`].
    #[must_use]
    pub const fn output(&self) -> &Out {
        &self.output
    }

    /// Converts this [`RunSummary`] into its `Out`put.
    #[must_use]
    pub fn into_output(self) -> Out {
        self.output
    }
}

impl<Out: io::Write> RunSummary<Out> {
    /// Finalizes this run: renders the summary, writes it into the `Out`put
    /// prefixed by a blank line and persists it into [`Config::output_file`],
    /// creating missing parent directories first. The file is overwritten.
    ///
    /// Never mutates the counters, so calling it again re-renders identical
    /// text and rewrites the file.
    ///
    /// # Errors
    ///
    /// - [`UsageError::NotStarted`] if the run hasn't begun;
    /// - [`OutputError`] if writing into the `Out`put or the file failed. It
    ///   still carries the rendered text.
    pub fn finalize(&mut self) -> crate::Result<String> {
        if self.planned.is_none() {
            return Err(usage(UsageError::NotStarted).into());
        }

        let report = self.render();
        let rendered = report.to_string();
        tracing::debug!(
            passed = self.stats.passed,
            failed = self.stats.failed,
            skipped = self.stats.skipped,
            flaky = self.stats.flaky,
            "test run finished"
        );

        let styled = report.styled(&Styles::new(self.config.coloring));
        if let Err(e) = writeln!(self.output, "\n{styled}")
            .and_then(|()| self.output.flush())
        {
            tracing::error!(error = %e, "failed to output summary");
            return Err(
                OutputError::new(OutputTarget::Stdout, rendered, e).into()
            );
        }

        let path = self.config.output_file.as_path();
        if let Err(e) = persist(path, &rendered) {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "failed to persist summary"
            );
            return Err(OutputError::new(
                OutputTarget::File(path.to_owned()),
                rendered,
                e,
            )
            .into());
        }
        tracing::info!(path = %path.display(), "summary written");

        Ok(rendered)
    }
}

/// Returns the text before the first line break of the given `message`.
#[must_use]
pub fn first_line(message: &str) -> &str {
    message
        .split('\n')
        .next()
        .map_or(message, |line| line.strip_suffix('\r').unwrap_or(line))
}

/// Writes the given `contents` into the file at `path`, creating its missing
/// parent directories.
fn persist(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, contents)
}

fn usage(err: UsageError) -> UsageError {
    tracing::warn!(error = %err, "summary misused");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Section;

    fn summary(config: Config) -> RunSummary<Vec<u8>> {
        RunSummary::raw(Vec::new(), config)
    }

    #[test]
    fn first_line_truncates_at_line_break() {
        assert_eq!(
            first_line("AssertionError: expected true\nstack..."),
            "AssertionError: expected true",
        );
        assert_eq!(first_line("Timeout\r\n    at Page.click"), "Timeout");
        assert_eq!(first_line("single line"), "single line");
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("\nonly stack"), "");
    }

    #[test]
    fn completion_before_begin_is_rejected() {
        let mut s = summary(Config::default());
        let err = s
            .record_completion("a", Outcome::Passed, Duration::ZERO, None)
            .unwrap_err();
        assert!(err.is_not_started());
        assert!(s.stats().is_empty());
        assert_eq!(s.duration(), Duration::ZERO);
    }

    #[test]
    fn begin_twice_is_rejected() {
        let mut s = summary(Config::default());
        s.begin(3).unwrap();
        assert_eq!(s.begin(4), Err(UsageError::AlreadyStarted));
        assert_eq!(s.planned(), Some(3));
    }

    #[test]
    fn completions_beyond_plan_are_rejected() {
        let mut s = summary(Config::default());
        s.begin(1).unwrap();
        s.record_completion("a", Outcome::Passed, Duration::from_millis(5), None)
            .unwrap();

        let err = s
            .record_completion("b", Outcome::Failed, Duration::from_millis(7), Some("x"))
            .unwrap_err();
        assert_eq!(err, UsageError::too_many_completions(1));
        assert_eq!(s.stats().completed(), 1);
        assert_eq!(s.stats().failed, 0);
        assert_eq!(s.duration(), Duration::from_millis(5));
        assert!(s.failures().is_empty());
    }

    #[test]
    fn durations_accumulate_for_every_outcome() {
        let mut s = summary(Config::default());
        s.begin(4).unwrap();
        for (n, outcome) in Outcome::ALL.into_iter().enumerate() {
            s.record_completion(
                format!("t{n}"),
                outcome,
                Duration::from_millis(100),
                None,
            )
            .unwrap();
        }
        assert_eq!(s.duration(), Duration::from_millis(400));
        assert_eq!(
            s.stats(),
            Stats {
                passed: 1,
                failed: 1,
                skipped: 1,
                flaky: 1,
            },
        );
    }

    #[test]
    fn failed_without_message_gets_placeholder() {
        let mut s = summary(Config::default());
        s.begin(3).unwrap();
        s.record_completion("none", Outcome::Failed, Duration::ZERO, None)
            .unwrap();
        s.record_completion("empty", Outcome::Failed, Duration::ZERO, Some(""))
            .unwrap();
        s.record_completion("stack", Outcome::Failed, Duration::ZERO, Some("\n  at x"))
            .unwrap();

        assert!(s.failures().iter().all(|f| f.message == UNKNOWN_ERROR));
        assert_eq!(
            s.failures().iter().map(|f| f.test.as_str()).collect::<Vec<_>>(),
            ["none", "empty", "stack"],
        );
    }

    #[test]
    fn only_failed_outcomes_are_captured() {
        let mut s = summary(Config::default());
        s.begin(2).unwrap();
        s.record_completion("flaky", Outcome::Flaky, Duration::ZERO, Some("retried"))
            .unwrap();
        s.record_completion("failed", Outcome::Failed, Duration::ZERO, Some("boom"))
            .unwrap();

        assert_eq!(
            s.failures(),
            [Failure {
                test: "failed".into(),
                message: "boom".into(),
            }],
        );
    }

    #[test]
    fn hidden_errors_are_counted_but_not_captured() {
        let mut s = summary(Config::default().hide(Section::Errors));
        s.begin(1).unwrap();
        s.record_completion("a", Outcome::Failed, Duration::ZERO, Some("boom"))
            .unwrap();

        assert_eq!(s.stats().failed, 1);
        assert!(s.failures().is_empty());
    }

    #[test]
    fn total_duration_saturates() {
        let mut s = summary(Config::default());
        s.begin(3).unwrap();
        s.record_completion("a", Outcome::Passed, Duration::MAX, None)
            .unwrap();
        s.record_completion("b", Outcome::Passed, Duration::from_millis(1), None)
            .unwrap();
        s.record_completion("c", Outcome::Flaky, Duration::MAX, None)
            .unwrap();

        assert_eq!(s.duration(), Duration::MAX);
        assert_eq!(s.stats().completed(), 3);
        assert!(s.render().to_string().contains("Duration:  "));
    }

    #[test]
    fn finalize_before_begin_is_rejected() {
        let mut s = summary(Config::default());
        let err = s.finalize().unwrap_err();
        assert!(err.is_usage());
        assert!(s.output().is_empty());
    }
}
