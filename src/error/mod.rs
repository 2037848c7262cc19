// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of the summary lifecycle.
//!
//! # Modules
//!
//! - [`usage`] - lifecycle misuse by the driving runner
//! - [`output`] - failures of writing the rendered summary
//! - `replay` - failures of replaying an event stream (`replay` feature)

pub mod output;
#[cfg(feature = "replay")]
pub mod replay;
pub mod usage;

use derive_more::{Display, Error, From};

pub use self::{
    output::{OutputError, OutputTarget},
    usage::{UsageError, UsageResult},
};
#[cfg(feature = "replay")]
pub use self::replay::{ReplayError, ReplayResult};

/// Any error of a [`RunSummary`] operation.
///
/// [`RunSummary`]: crate::RunSummary
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Lifecycle misuse.
    #[display("Usage error: {_0}")]
    Usage(UsageError),

    /// Rendered summary couldn't be written.
    #[display("{_0}")]
    Output(OutputError),
}

/// Result type alias for [`RunSummary`] operations.
///
/// [`RunSummary`]: crate::RunSummary
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if this is a lifecycle misuse.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Returns true if the rendered summary couldn't be written.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Output(_))
    }

    /// Returns the rendered summary, if rendering happened before failing.
    #[must_use]
    pub fn rendered(&self) -> Option<&str> {
        match self {
            Self::Output(e) => Some(e.rendered()),
            Self::Usage(_) => None,
        }
    }
}
