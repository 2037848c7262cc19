// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outcomes of completed test cases and test identifiers.

use std::str::FromStr;

use derive_more::Display;
use itertools::Itertools as _;

use crate::error::UsageError;

/// Separator between the segments of a test's title path.
pub const TITLE_PATH_SEPARATOR: &str = " › ";

/// Final classification of a completed test case.
///
/// Exactly one [`Outcome`] is reported per test case, so the counters of
/// a [`RunSummary`] are mutually exclusive.
///
/// [`RunSummary`]: crate::RunSummary
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// Test case passed on its first attempt.
    #[display("passed")]
    Passed,

    /// Test case failed.
    #[display("failed")]
    Failed,

    /// Test case wasn't executed.
    #[display("skipped")]
    Skipped,

    /// Test case failed at least once, but passed after being retried by
    /// the runner.
    #[display("flaky")]
    Flaky,
}

impl Outcome {
    /// All the [`Outcome`]s, in the order they're rendered in a summary.
    pub const ALL: [Self; 4] =
        [Self::Passed, Self::Failed, Self::Skipped, Self::Flaky];

    /// Indicates whether this [`Outcome`] is [`Outcome::Failed`].
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl FromStr for Outcome {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passed" => Ok(Self::Passed),
            "failed" => Ok(Self::Failed),
            "skipped" => Ok(Self::Skipped),
            "flaky" => Ok(Self::Flaky),
            _ => Err(UsageError::unknown_outcome(s)),
        }
    }
}

/// Joins the title path of a test case (enclosing describe blocks followed
/// by the test's own title) into a single test identifier.
///
/// Empty segments are omitted.
///
/// ```rust
/// # use run_summary::title_path;
/// assert_eq!(
///     title_path(["login.spec.ts", "Login", "rejects bad password"]),
///     "login.spec.ts › Login › rejects bad password",
/// );
/// ```
#[must_use]
pub fn title_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_owned())
        .join(TITLE_PATH_SEPARATOR)
}
