// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of replaying a recorded event stream.

use std::io;

use derive_more::{Display, Error, From};

use super::{Error as SummaryError, UsageError};

/// Failure to replay an event stream into a [`RunSummary`].
///
/// [`RunSummary`]: crate::RunSummary
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// Event stream couldn't be read.
    #[display("Failed to read events: {_0}")]
    Io(io::Error),

    /// Line of the event stream isn't a valid event.
    #[display("Malformed event on line {line}: {error}")]
    #[from(ignore)]
    Parse {
        /// 1-based line number of the malformed event.
        line: usize,

        /// Underlying JSON error.
        #[error(source)]
        error: serde_json::Error,
    },

    /// Event was rejected by the [`RunSummary`].
    ///
    /// [`RunSummary`]: crate::RunSummary
    #[display("{_0}")]
    Summary(SummaryError),
}

/// Result type alias for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

impl ReplayError {
    /// Creates a new parse error for the given 1-based `line`.
    #[must_use]
    pub const fn parse(line: usize, error: serde_json::Error) -> Self {
        Self::Parse { line, error }
    }

    /// Returns the [`UsageError`] behind this error, if any.
    #[must_use]
    pub const fn usage(&self) -> Option<&UsageError> {
        match self {
            Self::Summary(SummaryError::Usage(e)) => Some(e),
            Self::Io(_) | Self::Parse { .. } | Self::Summary(_) => None,
        }
    }

    /// Returns the line number of a malformed event, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            Self::Io(_) | Self::Summary(_) => None,
        }
    }
}

impl From<UsageError> for ReplayError {
    fn from(err: UsageError) -> Self {
        Self::Summary(err.into())
    }
}
