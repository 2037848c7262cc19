// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of a [`RunSummary`].
//!
//! [`Cli`] is meant to be flattened into the runner's own [`clap::Parser`],
//! so the summary can be tweaked from the command line without any
//! boilerplate:
//!
//! ```rust
//! # use clap::Parser as _;
//! #[derive(clap::Parser)]
//! struct Opts {
//!     #[command(flatten)]
//!     summary: run_summary::Cli,
//! }
//!
//! let opts = Opts::parse_from([
//!     "runner",
//!     "--summary-output", "out/summary.txt",
//!     "--summary-hide", "skipped,flaky",
//! ]);
//! let config = run_summary::Config::from(opts.summary);
//! assert!(!config.show_skipped);
//! assert!(config.show_passed);
//! ```
//!
//! [`RunSummary`]: crate::RunSummary

use std::{path::PathBuf, str::FromStr};

use smart_default::SmartDefault;

use crate::config::{Config, Section, DEFAULT_OUTPUT_FILE};

/// CLI options of a [`RunSummary`].
///
/// [`RunSummary`]: crate::RunSummary
#[derive(Clone, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Path of the plain-text summary report.
    #[arg(
        id = "summary-output",
        long = "summary-output",
        value_name = "path",
        default_value = DEFAULT_OUTPUT_FILE
    )]
    #[default(PathBuf::from(DEFAULT_OUTPUT_FILE))]
    pub output: PathBuf,

    /// Summary sections to omit.
    #[arg(
        id = "summary-hide",
        long = "summary-hide",
        value_name = "passed|failed|skipped|flaky|errors",
        value_delimiter = ','
    )]
    pub hide: Vec<Section>,

    /// Coloring policy for the console copy of the summary.
    #[arg(long, value_name = "auto|always|never", default_value = "auto")]
    #[default(Coloring::Auto)]
    pub color: Coloring,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        cli.hide.into_iter().fold(
            Self::default()
                .with_output_file(cli.output)
                .with_coloring(cli.color),
            Self::hide,
        )
    }
}

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coloring {
    /// Letting [`console::colors_enabled()`] and terminal detection decide,
    /// whether output should be colored.
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}
