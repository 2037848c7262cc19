// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors caused by a runner driving a [`RunSummary`] out of order.
//!
//! [`RunSummary`]: crate::RunSummary

use derive_more::{Display, Error};

/// Misuse of the `begin` → `record_completion` → `finalize` lifecycle.
///
/// None of these errors mutate the counters they guard.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum UsageError {
    /// Completion recorded (or summary finalized) before the run began.
    #[display("Run hasn't begun yet")]
    NotStarted,

    /// Run began more than once.
    #[display("Run has already begun")]
    AlreadyStarted,

    /// Event delivered after the run was finalized.
    #[display("Run has already been finalized")]
    AlreadyFinalized,

    /// Outcome kind isn't one of `passed`, `failed`, `skipped` or `flaky`.
    #[display("Unknown outcome: {value}")]
    UnknownOutcome {
        /// The unrecognized outcome.
        #[error(not(source))]
        value: String,
    },

    /// Runner reported more completions than it planned at the beginning.
    #[display("Received more completions than the {planned} planned tests")]
    TooManyCompletions {
        /// Number of tests planned by the runner.
        planned: usize,
    },
}

/// Result type alias for lifecycle operations.
pub type UsageResult<T> = Result<T, UsageError>;

impl UsageError {
    /// Creates a new unknown outcome error.
    #[must_use]
    pub fn unknown_outcome(value: impl Into<String>) -> Self {
        Self::UnknownOutcome {
            value: value.into(),
        }
    }

    /// Creates a new too many completions error.
    #[must_use]
    pub const fn too_many_completions(planned: usize) -> Self {
        Self::TooManyCompletions { planned }
    }

    /// Returns true if the run wasn't started.
    #[must_use]
    pub const fn is_not_started(&self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Returns true if this is an unknown outcome error.
    #[must_use]
    pub const fn is_unknown_outcome(&self) -> bool {
        matches!(self, Self::UnknownOutcome { .. })
    }

    /// Returns true if this is a too many completions error.
    #[must_use]
    pub const fn is_too_many_completions(&self) -> bool {
        matches!(self, Self::TooManyCompletions { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_and_predicates() {
        let err = UsageError::unknown_outcome("timedOut");
        assert!(err.is_unknown_outcome());
        assert!(!err.is_not_started());
        assert_eq!(err.to_string(), "Unknown outcome: timedOut");

        let err = UsageError::too_many_completions(3);
        assert!(err.is_too_many_completions());
        assert!(err.to_string().contains("3 planned tests"));

        assert!(UsageError::NotStarted.is_not_started());
    }

    #[test]
    fn usage_errors_have_no_source() {
        use std::error::Error as _;

        assert!(UsageError::unknown_outcome("x").source().is_none());
        assert!(UsageError::AlreadyStarted.source().is_none());
    }
}
