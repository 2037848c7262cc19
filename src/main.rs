// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Replays a JSON-lines event stream of a test run into a summary report.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use run_summary::{replay, Config, RunSummary};
use tracing::Level;

/// Renders a summary report of a test run from its event stream.
#[derive(Debug, Parser)]
#[command(name = "run-summary", version, about)]
struct Opts {
    /// JSON-lines event stream to replay, `-` for stdin.
    #[arg(value_name = "INPUT", default_value = "-")]
    input: PathBuf,

    /// Maximum level of diagnostics logged to stderr.
    #[arg(long, value_name = "level", default_value = "warn")]
    log_level: Level,

    #[command(flatten)]
    summary: run_summary::Cli,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(opts.log_level)
        .init();

    let input: Box<dyn BufRead> = if opts.input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&opts.input).with_context(|| {
            format!("failed to open `{}`", opts.input.display())
        })?;
        Box::new(BufReader::new(file))
    };

    let mut summary = RunSummary::new(Config::from(opts.summary));
    _ = replay(input, &mut summary)
        .with_context(|| format!("failed to replay `{}`", opts.input.display()))?;

    Ok(())
}
