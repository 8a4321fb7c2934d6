// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Passive listeners of [`Report`] notifications.
//!
//! A [`Formatter`] receives the ordered notification stream produced by a
//! [`Report`] traversal. Every method has a no-op default, so a concrete
//! formatter overrides only the subset of notifications it recognizes and
//! ignores the rest. [`Broadcast`] fans one stream out to several
//! formatters; [`Basic`] renders it to a terminal.
//!
//! [`Report`]: crate::Report

pub mod basic;
pub mod broadcast;
pub mod out;

use crate::{
    ast::{Background, Element, Examples, Feature, Step, Table},
    report::ElementReport,
    result::{StepFailure, StepResult},
    Result,
};

#[doc(inline)]
pub use self::{basic::Basic, broadcast::Broadcast, out::Styles};

/// Passive listener of the notification stream produced by a [`Report`].
///
/// One method per notification name, invoked in the exact order defined by
/// the traversal grammar (see the [crate docs](crate)). Every `before_X`
/// notification is paired with an `after_X` one at the same nesting depth,
/// carrying the same argument.
///
/// All defaults are no-ops: implement only what you need. Returning an
/// [`Err`] from any method aborts the whole traversal immediately; the
/// remaining notifications (including closing `after_*` ones) are never
/// emitted.
///
/// [`Report`]: crate::Report
pub trait Formatter {
    /// Opens the whole run, before the first [`Feature`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_features(&mut self, features: &[Feature]) -> Result<()> {
        let _ = features;
        Ok(())
    }

    /// Opens a single [`Feature`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_feature(&mut self, feature: &Feature) -> Result<()> {
        let _ = feature;
        Ok(())
    }

    /// Opens a tag set. Emitted even when `tags` is empty: the brackets
    /// always appear.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_tags(&mut self, tags: &[String]) -> Result<()> {
        let _ = tags;
        Ok(())
    }

    /// Closes a tag set opened by [`Formatter::before_tags()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_tags(&mut self, tags: &[String]) -> Result<()> {
        let _ = tags;
        Ok(())
    }

    /// Announces the current [`Feature`]'s name, right after its tags.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn feature_name(&mut self, name: &str) -> Result<()> {
        let _ = name;
        Ok(())
    }

    /// Opens the [`Background`] of the current [`Feature`], if one is
    /// declared. Emitted once per feature, before any of its elements.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_background(&mut self, background: &Background) -> Result<()> {
        let _ = background;
        Ok(())
    }

    /// Announces the current [`Background`]'s name.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn background_name(&mut self, name: &str) -> Result<()> {
        let _ = name;
        Ok(())
    }

    /// Closes the [`Background`] opened by
    /// [`Formatter::before_background()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_background(&mut self, background: &Background) -> Result<()> {
        let _ = background;
        Ok(())
    }

    /// Opens a scenario-like [`Element`] of the current [`Feature`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_feature_element(&mut self, element: &Element) -> Result<()> {
        let _ = element;
        Ok(())
    }

    /// Announces the current [`Element`]'s name (a scenario's or an
    /// outline's, same notification either way).
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn scenario_name(&mut self, name: &str) -> Result<()> {
        let _ = name;
        Ok(())
    }

    /// Closes the [`Element`] opened by
    /// [`Formatter::before_feature_element()`]. The [`ElementReport`]
    /// answers the element's failed predicate, computed after all of its
    /// steps were visited.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_feature_element(&mut self, element: &ElementReport<'_>) -> Result<()> {
        let _ = element;
        Ok(())
    }

    /// Opens the step list of exactly one [`Element`] or one [`Background`].
    /// Not emitted for an empty step list.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_steps(&mut self, steps: &[Step]) -> Result<()> {
        let _ = steps;
        Ok(())
    }

    /// Closes the step list opened by [`Formatter::before_steps()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_steps(&mut self, steps: &[Step]) -> Result<()> {
        let _ = steps;
        Ok(())
    }

    /// Opens a single [`Step`], before its outcome is known.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_step(&mut self, step: &Step) -> Result<()> {
        let _ = step;
        Ok(())
    }

    /// Opens a [`Step`]'s result block, once its [`StepResult`] is known.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_step_result(&mut self, step: &Step, result: &StepResult) -> Result<()> {
        let _ = (step, result);
        Ok(())
    }

    /// Announces the current [`Step`]'s name along with its [`StepResult`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn step_name(&mut self, step: &Step, result: &StepResult) -> Result<()> {
        let _ = (step, result);
        Ok(())
    }

    /// Surfaces the [`StepFailure`] of a failed [`Step`]. Emitted exactly
    /// once per failed step, strictly between [`Formatter::step_name()`] and
    /// [`Formatter::after_step_result()`], and never for any other outcome.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn exception(&mut self, failure: &StepFailure) -> Result<()> {
        let _ = failure;
        Ok(())
    }

    /// Closes the result block opened by
    /// [`Formatter::before_step_result()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_step_result(&mut self, step: &Step, result: &StepResult) -> Result<()> {
        let _ = (step, result);
        Ok(())
    }

    /// Closes the [`Step`] opened by [`Formatter::before_step()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_step(&mut self, step: &Step) -> Result<()> {
        let _ = step;
        Ok(())
    }

    /// Opens the [`Examples`] tables of an [`Element::Outline`]. Emitted for
    /// every outline, even one with zero tables: the brackets always appear.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_examples_array(&mut self, examples: &[Examples]) -> Result<()> {
        let _ = examples;
        Ok(())
    }

    /// Closes the tables opened by
    /// [`Formatter::before_examples_array()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_examples_array(&mut self, examples: &[Examples]) -> Result<()> {
        let _ = examples;
        Ok(())
    }

    /// Opens a single [`Examples`] table.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_examples(&mut self, examples: &Examples) -> Result<()> {
        let _ = examples;
        Ok(())
    }

    /// Announces the current [`Examples`] table's name.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn examples_name(&mut self, name: &str) -> Result<()> {
        let _ = name;
        Ok(())
    }

    /// Closes the [`Examples`] table opened by
    /// [`Formatter::before_examples()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_examples(&mut self, examples: &Examples) -> Result<()> {
        let _ = examples;
        Ok(())
    }

    /// Opens the [`Table`] of the current [`Examples`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_outline_table(&mut self, table: &Table) -> Result<()> {
        let _ = table;
        Ok(())
    }

    /// Closes the [`Table`] opened by
    /// [`Formatter::before_outline_table()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_outline_table(&mut self, table: &Table) -> Result<()> {
        let _ = table;
        Ok(())
    }

    /// Opens a [`Table`] row (the header row included).
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_table_row(&mut self, row: &[String]) -> Result<()> {
        let _ = row;
        Ok(())
    }

    /// Closes the row opened by [`Formatter::before_table_row()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_table_row(&mut self, row: &[String]) -> Result<()> {
        let _ = row;
        Ok(())
    }

    /// Opens a single cell of the current row.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn before_table_cell(&mut self, cell: &str) -> Result<()> {
        let _ = cell;
        Ok(())
    }

    /// Announces the current cell's value.
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn table_cell_value(&mut self, cell: &str) -> Result<()> {
        let _ = cell;
        Ok(())
    }

    /// Closes the cell opened by [`Formatter::before_table_cell()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_table_cell(&mut self, cell: &str) -> Result<()> {
        let _ = cell;
        Ok(())
    }

    /// Closes the [`Feature`] opened by [`Formatter::before_feature()`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_feature(&mut self, feature: &Feature) -> Result<()> {
        let _ = feature;
        Ok(())
    }

    /// Closes the run opened by [`Formatter::before_features()`], after the
    /// last [`Feature`].
    ///
    /// # Errors
    ///
    /// Any [`Err`] aborts the traversal and propagates out of the run.
    fn after_features(&mut self, features: &[Feature]) -> Result<()> {
        let _ = features;
        Ok(())
    }
}
