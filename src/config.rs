// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration of a [`RunSummary`].
//!
//! [`RunSummary`]: crate::RunSummary

use std::{path::PathBuf, str::FromStr};

use derive_more::Display;
use smart_default::SmartDefault;

use crate::{cli::Coloring, Outcome};

/// Default path of the persisted summary report.
pub const DEFAULT_OUTPUT_FILE: &str = "reports/summary.txt";

/// Immutable configuration of a [`RunSummary`], fixed at construction.
///
/// [`RunSummary`]: crate::RunSummary
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Path the rendered summary is persisted to.
    #[default(PathBuf::from(DEFAULT_OUTPUT_FILE))]
    pub output_file: PathBuf,

    /// Whether the passed count is rendered.
    #[default(true)]
    pub show_passed: bool,

    /// Whether the failed count is rendered.
    #[default(true)]
    pub show_failed: bool,

    /// Whether the skipped count is rendered.
    #[default(true)]
    pub show_skipped: bool,

    /// Whether the flaky count is rendered.
    #[default(true)]
    pub show_flaky: bool,

    /// Whether failure details are collected and rendered.
    #[default(true)]
    pub show_errors: bool,

    /// Coloring of the console copy. Never affects the persisted report.
    ///
    /// [`Coloring::Auto`] only detects whether [`io::Stdout`] is a terminal,
    /// even if the summary writes its console copy elsewhere.
    ///
    /// [`io::Stdout`]: std::io::Stdout
    #[default(Coloring::Auto)]
    pub coloring: Coloring,
}

impl Config {
    /// Sets the path the rendered summary is persisted to.
    #[must_use]
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Sets the [`Coloring`] of the console copy.
    #[must_use]
    pub fn with_coloring(mut self, coloring: Coloring) -> Self {
        self.coloring = coloring;
        self
    }

    /// Omits the given [`Section`] from the rendered summary.
    #[must_use]
    pub fn hide(mut self, section: Section) -> Self {
        *self.flag_mut(section) = false;
        self
    }

    /// Includes the given [`Section`] into the rendered summary.
    #[must_use]
    pub fn show(mut self, section: Section) -> Self {
        *self.flag_mut(section) = true;
        self
    }

    /// Indicates whether the given [`Section`] is rendered.
    #[must_use]
    pub const fn shows(&self, section: Section) -> bool {
        match section {
            Section::Passed => self.show_passed,
            Section::Failed => self.show_failed,
            Section::Skipped => self.show_skipped,
            Section::Flaky => self.show_flaky,
            Section::Errors => self.show_errors,
        }
    }

    fn flag_mut(&mut self, section: Section) -> &mut bool {
        match section {
            Section::Passed => &mut self.show_passed,
            Section::Failed => &mut self.show_failed,
            Section::Skipped => &mut self.show_skipped,
            Section::Flaky => &mut self.show_flaky,
            Section::Errors => &mut self.show_errors,
        }
    }
}

/// Toggleable section of a rendered summary.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Section {
    /// Passed count line.
    #[display("passed")]
    Passed,

    /// Failed count line.
    #[display("failed")]
    Failed,

    /// Skipped count line.
    #[display("skipped")]
    Skipped,

    /// Flaky count line.
    #[display("flaky")]
    Flaky,

    /// `FAILURES` listing.
    #[display("errors")]
    Errors,
}

impl From<Outcome> for Section {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Passed => Self::Passed,
            Outcome::Failed => Self::Failed,
            Outcome::Skipped => Self::Skipped,
            Outcome::Flaky => Self::Flaky,
        }
    }
}

impl FromStr for Section {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passed" => Ok(Self::Passed),
            "failed" => Ok(Self::Failed),
            "skipped" => Ok(Self::Skipped),
            "flaky" => Ok(Self::Flaky),
            "errors" => Ok(Self::Errors),
            _ => Err("possible options: passed, failed, skipped, flaky, errors"),
        }
    }
}
