// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deterministic rendering of a run summary.
//!
//! A [`Report`] is a sequence of [`Line`]s, each tagged with a [`LineKind`],
//! so the very same content may be joined as plain text (for the persisted
//! file and the caller) or styled for a terminal.

use std::{fmt, time::Duration};

use itertools::Itertools as _;

use crate::{style::Styles, Outcome, RunSummary};

/// Width of borders and dividers, in characters.
pub const WIDTH: usize = 60;

/// Character of the outer borders.
pub const BORDER: char = '═';

/// Character of the dividers between sections.
pub const DIVIDER: char = '─';

/// Title of a summary.
pub const TITLE: &str = "TEST SUMMARY";

/// Marker of a failed test case in the `FAILURES` section.
pub const FAILURE_MARKER: &str = "❌";

/// Indentation of a failure message.
pub const MESSAGE_INDENT: &str = "   ";

/// Role of a [`Line`] in a [`Report`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {
    /// Outer border.
    Border,

    /// Title or a section heading.
    Header,

    /// Empty line.
    Blank,

    /// Counter of a single [`Outcome`].
    Count(Outcome),

    /// Divider between sections.
    Divider,

    /// `Total`, `Duration` or `Success` line.
    Totals,

    /// Identifier of a failed test case.
    FailedTest,

    /// First line of a failure message.
    FailureMessage,
}

/// Single line of a [`Report`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    /// Role of this line.
    pub kind: LineKind,

    /// Plain text of this line.
    pub text: String,
}

impl Line {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Rendered summary of a run.
///
/// [`Display`]ing a [`Report`] gives its plain text: lines joined with `\n`,
/// without a trailing newline.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    /// Renders the current state of the given [`RunSummary`].
    ///
    /// A summary that hasn't begun is rendered as a run of `0` tests.
    #[must_use]
    pub fn new<Out>(summary: &RunSummary<Out>) -> Self {
        let config = summary.config();
        let stats = summary.stats();
        let planned = summary.planned().unwrap_or_default();

        let border = || Line::new(LineKind::Border, rule(BORDER));
        let mut lines = vec![
            border(),
            Line::new(LineKind::Header, TITLE),
            border(),
            Line::new(LineKind::Blank, ""),
        ];

        lines.extend(
            Outcome::ALL
                .into_iter()
                .filter(|o| config.shows((*o).into()))
                .map(|o| {
                    let (marker, label) = count_label(o);
                    Line::new(
                        LineKind::Count(o),
                        format!("{marker} {label}{}", stats.count(o)),
                    )
                }),
        );

        lines.extend([
            Line::new(LineKind::Divider, rule(DIVIDER)),
            Line::new(LineKind::Totals, format!("Total:     {planned} tests")),
            Line::new(
                LineKind::Totals,
                format!("Duration:  {}s", seconds(summary.duration())),
            ),
            Line::new(
                LineKind::Totals,
                format!("Success:   {}%", stats.success_percentage(planned)),
            ),
        ]);

        if config.show_errors && !summary.failures().is_empty() {
            lines.extend([
                Line::new(LineKind::Blank, ""),
                Line::new(LineKind::Header, "FAILURES:"),
                Line::new(LineKind::Divider, rule(DIVIDER)),
            ]);
            for failure in summary.failures() {
                lines.extend([
                    Line::new(LineKind::Blank, ""),
                    Line::new(
                        LineKind::FailedTest,
                        format!("{FAILURE_MARKER} {}", failure.test),
                    ),
                    Line::new(
                        LineKind::FailureMessage,
                        format!("{MESSAGE_INDENT}{}", failure.message),
                    ),
                ]);
            }
        }

        lines.push(border());

        Self { lines }
    }

    /// Returns the [`Line`]s of this [`Report`].
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Joins the [`Line`]s of this [`Report`] applying the given [`Styles`].
    ///
    /// Equals to the plain text if the [`Styles`] aren't present.
    #[must_use]
    pub fn styled(&self, styles: &Styles) -> String {
        self.lines
            .iter()
            .map(|line| {
                let text = line.text.as_str();
                match line.kind {
                    LineKind::Header => styles.bold(styles.header(text)),
                    LineKind::Count(Outcome::Passed) => styles.ok(text),
                    LineKind::Count(Outcome::Failed)
                    | LineKind::FailedTest => styles.err(text),
                    LineKind::Count(Outcome::Skipped) => styles.skipped(text),
                    LineKind::Count(Outcome::Flaky) => styles.flaky(text),
                    LineKind::Totals => styles.bold(text),
                    LineKind::Border
                    | LineKind::Blank
                    | LineKind::Divider
                    | LineKind::FailureMessage => text.into(),
                }
            })
            .join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.iter().map(|l| l.text.as_str()).format("\n"))
    }
}

/// Returns the marker and the padded label of an [`Outcome`] counter line.
///
/// Labels are padded so the counts line up in a single column.
#[must_use]
pub const fn count_label(outcome: Outcome) -> (&'static str, &'static str) {
    match outcome {
        Outcome::Passed => ("✓", "Passed:  "),
        Outcome::Failed => ("✗", "Failed:  "),
        Outcome::Skipped => ("-", "Skipped: "),
        Outcome::Flaky => ("⚡", "Flaky:   "),
    }
}

/// Formats the given [`Duration`] as seconds with exactly one fractional
/// digit, rounding half up on whole milliseconds.
#[must_use]
pub fn seconds(duration: Duration) -> String {
    // Integer half-up: 2050ms is `2.1`, not float `toFixed(1)`'s `2.0`.
    let tenths = (duration.as_millis() + 50) / 100;
    format!("{}.{}", tenths / 10, tenths % 10)
}

fn rule(c: char) -> String {
    std::iter::repeat(c).take(WIDTH).collect()
}
