// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`RunSummary`] handle shareable between concurrent workers.

use std::{
    io,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use crate::{error::UsageResult, Config, Failure, Outcome, RunSummary, Stats};

/// Cloneable handle to a single [`RunSummary`].
///
/// Every operation is performed under one lock, so completions reported by
/// concurrent workers never interleave.
///
/// ```rust
/// # use std::{thread, time::Duration};
/// # use run_summary::{Config, Outcome, RunSummary, Shared};
/// let shared: Shared<Vec<u8>> =
///     RunSummary::raw(Vec::new(), Config::default()).into();
/// shared.begin(8)?;
///
/// let workers = (0..4)
///     .map(|w| {
///         let shared = shared.clone();
///         thread::spawn(move || {
///             for t in 0..2 {
///                 shared
///                     .record_completion(
///                         format!("worker {w} › test {t}"),
///                         Outcome::Passed,
///                         Duration::from_millis(10),
///                         None,
///                     )
///                     .unwrap();
///             }
///         })
///     })
///     .collect::<Vec<_>>();
/// for w in workers {
///     w.join().unwrap();
/// }
///
/// assert_eq!(shared.stats().passed, 8);
/// # Ok::<_, run_summary::UsageError>(())
/// ```
#[derive(Debug)]
pub struct Shared<Out = io::Stdout>(Arc<Mutex<RunSummary<Out>>>);

impl<Out> Clone for Shared<Out> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<Out> From<RunSummary<Out>> for Shared<Out> {
    fn from(summary: RunSummary<Out>) -> Self {
        Self(Arc::new(Mutex::new(summary)))
    }
}

impl Shared {
    /// Creates a new [`Shared`] [`RunSummary`] writing its console copy to
    /// [`io::Stdout`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        RunSummary::new(config).into()
    }
}

impl<Out> Shared<Out> {
    /// Performs [`RunSummary::begin()`] under the lock.
    ///
    /// # Errors
    ///
    /// See [`RunSummary::begin()`].
    pub fn begin(&self, planned: usize) -> UsageResult<()> {
        self.lock().begin(planned)
    }

    /// Performs [`RunSummary::record_completion()`] under the lock.
    ///
    /// # Errors
    ///
    /// See [`RunSummary::record_completion()`].
    pub fn record_completion(
        &self,
        test: impl Into<String>,
        outcome: Outcome,
        duration: Duration,
        error: Option<&str>,
    ) -> UsageResult<()> {
        let test = test.into();
        self.lock().record_completion(test, outcome, duration, error)
    }

    /// Returns a snapshot of the outcome counters.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.lock().stats()
    }

    /// Returns a snapshot of the captured [`Failure`]s.
    #[must_use]
    pub fn failures(&self) -> Vec<Failure> {
        self.lock().failures().to_vec()
    }

    /// Runs the given function on the locked [`RunSummary`].
    pub fn with<R>(&self, f: impl FnOnce(&mut RunSummary<Out>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Unwraps the [`RunSummary`] if this is the last handle to it.
    ///
    /// # Errors
    ///
    /// Returns this handle back if other clones of it are still alive.
    pub fn into_inner(self) -> Result<RunSummary<Out>, Self> {
        Arc::try_unwrap(self.0)
            .map(|m| m.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(Self)
    }

    /// Counters are only updated once every check passed, so a panicked
    /// holder can't leave them half-updated.
    fn lock(&self) -> MutexGuard<'_, RunSummary<Out>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<Out: io::Write> Shared<Out> {
    /// Performs [`RunSummary::finalize()`] under the lock.
    ///
    /// # Errors
    ///
    /// See [`RunSummary::finalize()`].
    pub fn finalize(&self) -> crate::Result<String> {
        self.lock().finalize()
    }
}
