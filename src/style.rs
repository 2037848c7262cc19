// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Terminal styling of the console copy of a summary.

use std::borrow::Cow;

use console::{Style, Term};

use crate::cli::Coloring;

/// [`Style`]s for terminal output.
#[derive(Clone, Debug)]
pub struct Styles {
    /// [`Style`] for rendering passed counts.
    pub ok: Style,

    /// [`Style`] for rendering skipped counts.
    pub skipped: Style,

    /// [`Style`] for rendering flaky counts.
    pub flaky: Style,

    /// [`Style`] for rendering failed counts and failures.
    pub err: Style,

    /// [`Style`] for rendering headers.
    pub header: Style,

    /// [`Style`] for rendering __bold__.
    pub bold: Style,

    /// Indicates whether styling is applied at all.
    pub is_present: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(Coloring::Auto)
    }
}

impl Styles {
    /// Creates new [`Styles`] applying the given [`Coloring`] policy.
    #[must_use]
    pub fn new(coloring: Coloring) -> Self {
        let is_present = match coloring {
            Coloring::Always => true,
            Coloring::Never => false,
            Coloring::Auto => {
                Term::stdout().features().is_attended()
                    && console::colors_enabled()
            }
        };
        Self {
            ok: Style::new().green().force_styling(true),
            skipped: Style::new().cyan().force_styling(true),
            flaky: Style::new().yellow().force_styling(true),
            err: Style::new().red().force_styling(true),
            header: Style::new().blue().force_styling(true),
            bold: Style::new().bold().force_styling(true),
            is_present,
        }
    }

    /// If styling is present colors `input` with [`Styles::ok`] color or
    /// leaves "as is" otherwise.
    #[must_use]
    pub fn ok<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.ok, input)
    }

    /// If styling is present colors `input` with [`Styles::skipped`] color
    /// or leaves "as is" otherwise.
    #[must_use]
    pub fn skipped<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.skipped, input)
    }

    /// If styling is present colors `input` with [`Styles::flaky`] color or
    /// leaves "as is" otherwise.
    #[must_use]
    pub fn flaky<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.flaky, input)
    }

    /// If styling is present colors `input` with [`Styles::err`] color or
    /// leaves "as is" otherwise.
    #[must_use]
    pub fn err<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.err, input)
    }

    /// If styling is present colors `input` with [`Styles::header`] color
    /// or leaves "as is" otherwise.
    #[must_use]
    pub fn header<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.header, input)
    }

    /// If styling is present makes `input` __bold__ or leaves "as is"
    /// otherwise.
    #[must_use]
    pub fn bold<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.bold, input)
    }

    fn apply<'a>(
        &self,
        style: &Style,
        input: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        if self.is_present {
            style.apply_to(input.into()).to_string().into()
        } else {
            input.into()
        }
    }
}
