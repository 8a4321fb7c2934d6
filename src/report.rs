// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traversal of a document tree into an ordered notification stream.
//!
//! A [`Report`] walks the given [`Feature`]s depth-first exactly once,
//! asking its [`OutcomeSource`] for every visited [`Step`]'s result and
//! emitting notifications to its [`Formatter`] in-line, synchronously, in
//! the fixed order several legacy formatters rely on (see the
//! [crate docs](crate) for the full grammar). Nothing is queued, buffered or
//! reordered.

use std::ops::Deref;

use crate::{
    ast::{Background, Element, Examples, Feature, Step, Table},
    result::{any_failed, Status, StepResult},
    Formatter, Result,
};

/// Source of per-[`Step`] outcomes.
///
/// The seam through which the execution engine's results enter the
/// notification stream: a [`Report`] invokes it exactly once per visited
/// [`Step`], sequentially, in traversal order, and stays oblivious of how
/// the outcome was computed. For an [`Element::Outline`] the source decides
/// how template steps map onto outcomes; the traversal visits the template
/// steps as written.
pub trait OutcomeSource {
    /// Resolves the outcome of the given `step`.
    ///
    /// # Errors
    ///
    /// An [`Err`] here is an [`Error::Outcome`] condition: fatal to the
    /// whole run, never retried.
    ///
    /// [`Error::Outcome`]: crate::Error::Outcome
    fn step_outcome(&mut self, step: &Step) -> Result<StepResult>;
}

impl<F: FnMut(&Step) -> Result<StepResult>> OutcomeSource for F {
    fn step_outcome(&mut self, step: &Step) -> Result<StepResult> {
        self(step)
    }
}

/// [`Element`] paired with the [`Status`]es its visited [`Step`]s produced,
/// handed to [`Formatter::after_feature_element()`].
///
/// Dereferences to the underlying [`Element`].
#[derive(Clone, Copy, Debug)]
pub struct ElementReport<'r> {
    /// Traversed [`Element`].
    element: &'r Element,

    /// [`Status`]es of the element's visited [`Step`]s, in traversal order.
    statuses: &'r [Status],
}

impl ElementReport<'_> {
    /// Indicates whether this [`Element`] failed: true iff any of its
    /// visited [`Step`]s' outcomes was a [`Status::Failed`].
    #[must_use]
    pub fn failed(&self) -> bool {
        any_failed(self.statuses.iter().copied())
    }

    /// [`Status`]es of the element's visited [`Step`]s, in traversal order.
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        self.statuses
    }
}

impl Deref for ElementReport<'_> {
    type Target = Element;

    fn deref(&self) -> &Self::Target {
        self.element
    }
}

/// Replays a document tree as an ordered notification stream to a single
/// [`Formatter`] (typically a [`Broadcast`]).
///
/// One traversal at a time: [`Report::run()`] borrows the whole [`Report`]
/// mutably, so concurrent runs require independent instances with their own
/// formatter sets.
///
/// [`Broadcast`]: crate::Broadcast
#[derive(Clone, Debug, Default)]
pub struct Report<F> {
    /// [`Formatter`] receiving the notification stream.
    formatter: F,
}

impl<F> Report<F> {
    /// Creates a new [`Report`] emitting to the given `formatter`.
    #[must_use]
    pub const fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Returns the underlying [`Formatter`].
    #[must_use]
    pub const fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Returns the underlying [`Formatter`] mutably.
    pub fn formatter_mut(&mut self) -> &mut F {
        &mut self.formatter
    }

    /// Unwraps this [`Report`] into its [`Formatter`].
    #[must_use]
    pub fn into_formatter(self) -> F {
        self.formatter
    }
}

impl<F: Formatter> Report<F> {
    /// Walks the given `features` once, emitting the full notification
    /// stream and pulling every visited [`Step`]'s outcome from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Err`] returned by the [`Formatter`] or by the
    /// [`OutcomeSource`], aborting the traversal at that point with no
    /// closing notifications for in-progress nodes.
    pub fn run<S: OutcomeSource>(
        &mut self,
        features: &[Feature],
        source: &mut S,
    ) -> Result<()> {
        self.formatter.before_features(features)?;
        for feature in features {
            self.feature(feature, source)?;
        }
        self.formatter.after_features(features)
    }

    fn feature<S: OutcomeSource>(
        &mut self,
        feature: &Feature,
        source: &mut S,
    ) -> Result<()> {
        self.formatter.before_feature(feature)?;
        self.tags(&feature.tags)?;
        self.formatter.feature_name(&feature.name)?;
        if let Some(background) = &feature.background {
            self.background(background, source)?;
        }
        for element in &feature.elements {
            self.element(element, source)?;
        }
        self.formatter.after_feature(feature)
    }

    fn background<S: OutcomeSource>(
        &mut self,
        background: &Background,
        source: &mut S,
    ) -> Result<()> {
        self.formatter.before_background(background)?;
        self.formatter.background_name(&background.name)?;
        self.steps(&background.steps, source)?;
        self.formatter.after_background(background)
    }

    fn element<S: OutcomeSource>(
        &mut self,
        element: &Element,
        source: &mut S,
    ) -> Result<()> {
        self.formatter.before_feature_element(element)?;
        self.tags(element.tags())?;
        self.formatter.scenario_name(element.name())?;
        let statuses = self.steps(element.steps(), source)?;
        if let Some(examples) = element.examples() {
            self.examples_array(examples)?;
        }
        self.formatter.after_feature_element(&ElementReport {
            element,
            statuses: &statuses,
        })
    }

    /// Emits the steps block and returns the visited [`Step`]s'
    /// [`Status`]es in traversal order.
    ///
    /// An empty step list emits no block at all: the
    /// `before_steps`/`after_steps` brackets only ever wrap actual steps.
    fn steps<S: OutcomeSource>(
        &mut self,
        steps: &[Step],
        source: &mut S,
    ) -> Result<Vec<Status>> {
        let mut statuses = Vec::with_capacity(steps.len());
        if steps.is_empty() {
            return Ok(statuses);
        }

        self.formatter.before_steps(steps)?;
        for step in steps {
            statuses.push(self.step(step, source)?);
        }
        self.formatter.after_steps(steps)?;
        Ok(statuses)
    }

    fn step<S: OutcomeSource>(
        &mut self,
        step: &Step,
        source: &mut S,
    ) -> Result<Status> {
        self.formatter.before_step(step)?;
        let result = source.step_outcome(step)?;
        self.formatter.before_step_result(step, &result)?;
        self.formatter.step_name(step, &result)?;
        if result.is_failed() {
            if let Some(failure) = &result.failure {
                self.formatter.exception(failure)?;
            }
        }
        self.formatter.after_step_result(step, &result)?;
        self.formatter.after_step(step)?;
        Ok(result.status)
    }

    /// Emits the examples-array brackets unconditionally: an outline with
    /// zero tables still gets an empty pair.
    fn examples_array(&mut self, examples: &[Examples]) -> Result<()> {
        self.formatter.before_examples_array(examples)?;
        for table in examples {
            self.examples(table)?;
        }
        self.formatter.after_examples_array(examples)
    }

    fn examples(&mut self, examples: &Examples) -> Result<()> {
        self.formatter.before_examples(examples)?;
        self.formatter.examples_name(&examples.name)?;
        self.outline_table(&examples.table)?;
        self.formatter.after_examples(examples)
    }

    fn outline_table(&mut self, table: &Table) -> Result<()> {
        self.formatter.before_outline_table(table)?;
        for row in &table.rows {
            self.formatter.before_table_row(row)?;
            for cell in row {
                self.formatter.before_table_cell(cell)?;
                self.formatter.table_cell_value(cell)?;
                self.formatter.after_table_cell(cell)?;
            }
            self.formatter.after_table_row(row)?;
        }
        self.formatter.after_outline_table(table)
    }

    /// Emits the tag brackets unconditionally, an empty tag set included.
    fn tags(&mut self, tags: &[String]) -> Result<()> {
        self.formatter.before_tags(tags)?;
        self.formatter.after_tags(tags)
    }
}
