// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Aggregator of test-run results.
//!
//! A [`RunSummary`] subscribes to the lifecycle of a test run driven by an
//! external runner: it's told how many test cases are planned, then gets a
//! completion per finished test case, and once the run ends renders a
//! deterministic plain-text summary, printing it to stdout and persisting it
//! into a report file.
//!
//! ```text
//! ════════════════════════════════════════════════════════════
//! TEST SUMMARY
//! ════════════════════════════════════════════════════════════
//!
//! ✓ Passed:  1
//! ✗ Failed:  1
//! - Skipped: 1
//! ⚡ Flaky:   0
//! ────────────────────────────────────────────────────────────
//! Total:     3 tests
//! Duration:  0.3s
//! Success:   33%
//!
//! FAILURES:
//! ────────────────────────────────────────────────────────────
//!
//! ❌ B
//!    AssertionError: expected true
//! ════════════════════════════════════════════════════════════
//! ```
//!
//! Runners dispatching completions from concurrent workers should share a
//! [`Shared`] handle instead. Runners not written in Rust may drive a summary
//! through the JSON-lines [`event`] protocol (`replay` feature).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "replay")]
#[cfg_attr(docsrs, doc(cfg(feature = "replay")))]
pub mod event;
pub mod outcome;
pub mod render;
pub mod shared;
pub mod stats;
pub mod style;
pub mod summary;

#[doc(inline)]
pub use self::{
    cli::{Cli, Coloring},
    config::{Config, Section, DEFAULT_OUTPUT_FILE},
    error::{Error, OutputError, Result, UsageError},
    outcome::{title_path, Outcome},
    render::Report,
    shared::Shared,
    stats::Stats,
    summary::{first_line, Failure, RunSummary, UNKNOWN_ERROR},
};
#[cfg(feature = "replay")]
#[doc(inline)]
pub use self::{
    error::ReplayError,
    event::{replay, Event},
};
