// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outcome counters of a run.

use crate::Outcome;

/// Execution statistics of a run.
///
/// Every completed test case increments exactly one counter, so
/// [`Stats::completed()`] is always the number of recorded completions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Number of passed test cases.
    pub passed: usize,

    /// Number of failed test cases.
    pub failed: usize,

    /// Number of skipped test cases.
    pub skipped: usize,

    /// Number of test cases passed only after being retried.
    pub flaky: usize,
}

impl Stats {
    /// Creates a new [`Stats`] instance with all counts set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            skipped: 0,
            flaky: 0,
        }
    }

    /// Returns the number of completions these [`Stats`] have been collected
    /// for.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.passed + self.failed + self.skipped + self.flaky
    }

    /// Returns the counter of the given [`Outcome`].
    #[must_use]
    pub const fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Passed => self.passed,
            Outcome::Failed => self.failed,
            Outcome::Skipped => self.skipped,
            Outcome::Flaky => self.flaky,
        }
    }

    /// Increments the counter of the given [`Outcome`] by one.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Flaky => self.flaky += 1,
        }
    }

    /// Returns `true` if nothing was recorded yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.completed() == 0
    }

    /// Returns `true` if there are any failed test cases.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Returns the share of `planned` test cases that passed, as a
    /// percentage rounded half up to the nearest integer.
    ///
    /// Returns `0` if nothing was planned.
    #[must_use]
    pub const fn success_percentage(&self, planned: usize) -> u64 {
        if planned == 0 {
            return 0;
        }
        let (passed, planned) = (self.passed as u128, planned as u128);
        // round(100 * passed / planned) == floor((200 * passed + planned) / (2 * planned))
        ((200 * passed + planned) / (2 * planned)) as u64
    }
}
