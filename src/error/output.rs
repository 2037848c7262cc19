// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of emitting and persisting a rendered summary.

use std::{io, path::PathBuf};

use derive_more::{Display, Error};

/// Destination a rendered summary is written to.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum OutputTarget {
    /// Console copy of the summary.
    #[display("stdout")]
    Stdout,

    /// Persisted report file.
    #[display("{}", _0.display())]
    File(PathBuf),
}

/// Failure to write a rendered summary.
///
/// Carries the rendered text, so a caller can still use it when persisting
/// failed.
#[derive(Debug, Display, Error)]
#[display("Failed to write summary to {target}: {io}")]
pub struct OutputError {
    /// Where the summary was being written to.
    #[error(not(source))]
    target: OutputTarget,

    /// Rendered summary text.
    #[error(not(source))]
    rendered: String,

    /// Underlying I/O error.
    #[error(source)]
    io: io::Error,
}

impl OutputError {
    /// Creates a new [`OutputError`].
    #[must_use]
    pub const fn new(
        target: OutputTarget,
        rendered: String,
        io: io::Error,
    ) -> Self {
        Self {
            target,
            rendered,
            io,
        }
    }

    /// Returns the [`OutputTarget`] that failed.
    #[must_use]
    pub const fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Returns the rendered summary that wasn't written.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Returns the underlying [`io::Error`].
    #[must_use]
    pub const fn io(&self) -> &io::Error {
        &self.io
    }

    /// Returns true if the report file couldn't be written.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.target, OutputTarget::File(_))
    }

    /// Converts this error into the rendered summary it carries.
    #[must_use]
    pub fn into_rendered(self) -> String {
        self.rendered
    }
}
