// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! JSON-lines protocol for driving a [`RunSummary`] by an external runner.
//!
//! Every line of a stream is a single [`Event`]; blank lines are ignored:
//!
//! ```text
//! {"event":"begin","total":3}
//! {"event":"completion","test":"A","outcome":"passed","duration_ms":100}
//! {"event":"completion","title_path":["login","B"],"outcome":"failed","duration_ms":200,"error":"..."}
//! {"event":"end"}
//! ```

use std::{io, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ReplayError, ReplayResult, UsageError},
    title_path, Outcome, RunSummary,
};

/// Single lifecycle event of a test run.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Run began with the given number of planned test cases.
    Begin {
        /// Number of planned test cases.
        total: usize,
    },

    /// Test case completed.
    Completion(Completion),

    /// Run ended.
    End,
}

/// Completion of a single test case.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Completion {
    /// Identifier of the test case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    /// Title path of the test case, used when no `test` is given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title_path: Vec<String>,

    /// Outcome of the test case.
    ///
    /// Kept as a raw string, so an unknown outcome is reported as a
    /// [`UsageError`] rather than as a malformed line.
    pub outcome: String,

    /// Duration of the test case, in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,

    /// Error message of a failed test case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Completion {
    /// Returns the identifier of the completed test case.
    #[must_use]
    pub fn test_id(&self) -> String {
        self.test
            .clone()
            .unwrap_or_else(|| title_path(&self.title_path))
    }

    /// Parses the [`Outcome`] of the completed test case.
    ///
    /// # Errors
    ///
    /// [`UsageError::UnknownOutcome`] if the outcome isn't recognized.
    pub fn outcome(&self) -> Result<Outcome, UsageError> {
        self.outcome.parse()
    }

    /// Returns the [`Duration`] of the completed test case.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Drives the given [`RunSummary`] with the [`Event`]s read from `input`.
///
/// Returns the rendered summary of the [`Event::End`]. If the stream ends
/// without it, the summary is finalized anyway.
///
/// # Errors
///
/// - [`ReplayError::Io`] if `input` can't be read;
/// - [`ReplayError::Parse`] on a malformed line;
/// - [`ReplayError::Summary`] if the [`RunSummary`] rejects an [`Event`]
///   (including any [`Event`] after [`Event::End`]) or fails to be written.
pub fn replay<Out: io::Write>(
    input: impl io::BufRead,
    summary: &mut RunSummary<Out>,
) -> ReplayResult<String> {
    let mut rendered = None;
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str::<Event>(&line)
            .map_err(|e| ReplayError::parse(n + 1, e))?;
        if rendered.is_some() {
            return Err(UsageError::AlreadyFinalized.into());
        }

        match event {
            Event::Begin { total } => summary.begin(total)?,
            Event::Completion(c) => summary.record_completion(
                c.test_id(),
                c.outcome()?,
                c.duration(),
                c.error.as_deref(),
            )?,
            Event::End => {
                rendered = Some(summary.finalize()?);
            }
        }
    }

    match rendered {
        Some(r) => Ok(r),
        None => {
            tracing::warn!("event stream ended without `end`, finalizing");
            Ok(summary.finalize()?)
        }
    }
}
