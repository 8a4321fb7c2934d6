// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Default [`Formatter`] implementation outputting to a terminal.

use std::io;

use crate::{
    ast::{Element, Step},
    result::{Status, StepFailure, StepResult},
    Formatter, Result,
};

use super::out::Styles;

/// Default [`Formatter`] rendering a human-readable account of the run to an
/// [`io::Write`] implementor.
///
/// Overrides only the notifications it needs: headings, status-colored step
/// lines, captured failures and example tables. Everything else stays a
/// no-op, which is exactly the capability-subset contract formatters are
/// held to.
pub struct Basic<Out: io::Write = io::Stdout> {
    /// [`io::Write`] implementor to output into.
    output: Out,

    /// [`Styles`] for terminal output.
    styles: Styles,

    /// Current indentation, in columns.
    indent: usize,

    /// Keyword of the heading announced by the next `*_name` notification.
    keyword: &'static str,

    /// Cell values of the table row currently being collected.
    row: Vec<String>,
}

impl Basic {
    /// Creates a new [`Basic`] outputting to [`io::Stdout`].
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Basic {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<Out: io::Write> Basic<Out> {
    /// Creates a new [`Basic`] outputting to the given `output`.
    #[must_use]
    pub fn new(output: Out) -> Self {
        Self::with_styles(output, Styles::new())
    }

    /// Creates a new [`Basic`] outputting with the given `styles`.
    #[must_use]
    pub fn with_styles(output: Out, styles: Styles) -> Self {
        Self {
            output,
            styles,
            indent: 0,
            keyword: "Scenario",
            row: Vec::new(),
        }
    }

    /// Unwraps this [`Basic`] into its underlying output.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.output
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{:indent$}{line}", "", indent = self.indent)?;
        Ok(())
    }
}

impl<Out: io::Write> Formatter for Basic<Out> {
    fn feature_name(&mut self, name: &str) -> Result<()> {
        let line = self.styles.header(format!("Feature: {name}")).into_owned();
        self.write_line(&line)
    }

    fn before_background(&mut self, _: &crate::ast::Background) -> Result<()> {
        self.indent = 2;
        self.keyword = "Background";
        Ok(())
    }

    fn background_name(&mut self, name: &str) -> Result<()> {
        let line = self
            .styles
            .bold(format!("{}: {name}", self.keyword))
            .into_owned();
        self.write_line(&line)
    }

    fn after_background(&mut self, _: &crate::ast::Background) -> Result<()> {
        self.indent = 0;
        Ok(())
    }

    fn before_feature_element(&mut self, element: &Element) -> Result<()> {
        self.indent = 2;
        self.keyword = match element {
            Element::Scenario(_) => "Scenario",
            Element::Outline(_) => "Scenario Outline",
        };
        Ok(())
    }

    fn scenario_name(&mut self, name: &str) -> Result<()> {
        let line = self
            .styles
            .bold(format!("{}: {name}", self.keyword))
            .into_owned();
        self.write_line(&line)
    }

    fn after_feature_element(
        &mut self,
        _: &crate::report::ElementReport<'_>,
    ) -> Result<()> {
        self.indent = 0;
        Ok(())
    }

    fn before_steps(&mut self, _: &[Step]) -> Result<()> {
        self.indent += 2;
        Ok(())
    }

    fn after_steps(&mut self, _: &[Step]) -> Result<()> {
        self.indent = self.indent.saturating_sub(2);
        Ok(())
    }

    fn step_name(&mut self, step: &Step, result: &StepResult) -> Result<()> {
        let line = match result.status {
            Status::Passed => self.styles.ok(format!("✔ {step}")),
            Status::Failed => self.styles.err(format!("✘ {step}")),
            status @ (Status::Pending | Status::Skipped | Status::Undefined) => {
                self.styles.skipped(format!("- {step} ({status})"))
            }
        }
        .into_owned();
        self.write_line(&line)
    }

    fn exception(&mut self, failure: &StepFailure) -> Result<()> {
        let mut line = format!("  {failure}");
        if let Some(loc) = &failure.location {
            line.push_str(&format!(" (at {loc})"));
        }
        let line = self.styles.err(line).into_owned();
        self.write_line(&line)
    }

    fn examples_name(&mut self, name: &str) -> Result<()> {
        self.indent = 4;
        let line = self
            .styles
            .bold(format!("Examples: {name}").trim_end().to_owned())
            .into_owned();
        self.write_line(&line)
    }

    fn before_table_row(&mut self, _: &[String]) -> Result<()> {
        self.row.clear();
        Ok(())
    }

    fn table_cell_value(&mut self, cell: &str) -> Result<()> {
        self.row.push(cell.to_owned());
        Ok(())
    }

    fn after_table_row(&mut self, _: &[String]) -> Result<()> {
        self.indent = 6;
        let line = format!("| {} |", self.row.join(" | "));
        self.write_line(&line)
    }

    fn after_feature(&mut self, _: &crate::ast::Feature) -> Result<()> {
        self.indent = 0;
        writeln!(self.output)?;
        Ok(())
    }
}
