// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Passing notifications to multiple [`Formatter`]s.

use crate::{
    ast::{Background, Element, Examples, Feature, Step, Table},
    report::ElementReport,
    result::{StepFailure, StepResult},
    Formatter, Result,
};

/// Fan-out of one notification stream to multiple [`Formatter`]s.
///
/// Every notification is forwarded to each registered [`Formatter`] in
/// registration order, with identical arguments, and is fully delivered to
/// all of them before the traversal advances. An [`Err`] from any formatter
/// stops the fan-out at that formatter and propagates, aborting the run:
/// formatters registered after it don't receive the failed notification.
///
/// Holds no state beyond the formatter list. Register everything before the
/// run starts; the set is fixed for the run's duration (the [`Report`] owns
/// the [`Broadcast`] while running).
///
/// [`Report`]: crate::Report
#[derive(Default)]
pub struct Broadcast {
    /// Registered [`Formatter`]s, in registration order.
    formatters: Vec<Box<dyn Formatter>>,
}

impl Broadcast {
    /// Creates a new empty [`Broadcast`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the given `formatter` after all previously registered ones.
    pub fn register(&mut self, formatter: impl Formatter + 'static) {
        self.formatters.push(Box::new(formatter));
    }

    /// Number of registered [`Formatter`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Indicates whether no [`Formatter`] is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// Delivers one notification to every registered [`Formatter`] in order,
    /// stopping at the first [`Err`].
    fn each(
        &mut self,
        mut notify: impl FnMut(&mut dyn Formatter) -> Result<()>,
    ) -> Result<()> {
        self.formatters.iter_mut().try_for_each(|f| notify(f.as_mut()))
    }
}

impl Formatter for Broadcast {
    fn before_features(&mut self, features: &[Feature]) -> Result<()> {
        self.each(|f| f.before_features(features))
    }

    fn before_feature(&mut self, feature: &Feature) -> Result<()> {
        self.each(|f| f.before_feature(feature))
    }

    fn before_tags(&mut self, tags: &[String]) -> Result<()> {
        self.each(|f| f.before_tags(tags))
    }

    fn after_tags(&mut self, tags: &[String]) -> Result<()> {
        self.each(|f| f.after_tags(tags))
    }

    fn feature_name(&mut self, name: &str) -> Result<()> {
        self.each(|f| f.feature_name(name))
    }

    fn before_background(&mut self, background: &Background) -> Result<()> {
        self.each(|f| f.before_background(background))
    }

    fn background_name(&mut self, name: &str) -> Result<()> {
        self.each(|f| f.background_name(name))
    }

    fn after_background(&mut self, background: &Background) -> Result<()> {
        self.each(|f| f.after_background(background))
    }

    fn before_feature_element(&mut self, element: &Element) -> Result<()> {
        self.each(|f| f.before_feature_element(element))
    }

    fn scenario_name(&mut self, name: &str) -> Result<()> {
        self.each(|f| f.scenario_name(name))
    }

    fn after_feature_element(&mut self, element: &ElementReport<'_>) -> Result<()> {
        self.each(|f| f.after_feature_element(element))
    }

    fn before_steps(&mut self, steps: &[Step]) -> Result<()> {
        self.each(|f| f.before_steps(steps))
    }

    fn after_steps(&mut self, steps: &[Step]) -> Result<()> {
        self.each(|f| f.after_steps(steps))
    }

    fn before_step(&mut self, step: &Step) -> Result<()> {
        self.each(|f| f.before_step(step))
    }

    fn before_step_result(&mut self, step: &Step, result: &StepResult) -> Result<()> {
        self.each(|f| f.before_step_result(step, result))
    }

    fn step_name(&mut self, step: &Step, result: &StepResult) -> Result<()> {
        self.each(|f| f.step_name(step, result))
    }

    fn exception(&mut self, failure: &StepFailure) -> Result<()> {
        self.each(|f| f.exception(failure))
    }

    fn after_step_result(&mut self, step: &Step, result: &StepResult) -> Result<()> {
        self.each(|f| f.after_step_result(step, result))
    }

    fn after_step(&mut self, step: &Step) -> Result<()> {
        self.each(|f| f.after_step(step))
    }

    fn before_examples_array(&mut self, examples: &[Examples]) -> Result<()> {
        self.each(|f| f.before_examples_array(examples))
    }

    fn after_examples_array(&mut self, examples: &[Examples]) -> Result<()> {
        self.each(|f| f.after_examples_array(examples))
    }

    fn before_examples(&mut self, examples: &Examples) -> Result<()> {
        self.each(|f| f.before_examples(examples))
    }

    fn examples_name(&mut self, name: &str) -> Result<()> {
        self.each(|f| f.examples_name(name))
    }

    fn after_examples(&mut self, examples: &Examples) -> Result<()> {
        self.each(|f| f.after_examples(examples))
    }

    fn before_outline_table(&mut self, table: &Table) -> Result<()> {
        self.each(|f| f.before_outline_table(table))
    }

    fn after_outline_table(&mut self, table: &Table) -> Result<()> {
        self.each(|f| f.after_outline_table(table))
    }

    fn before_table_row(&mut self, row: &[String]) -> Result<()> {
        self.each(|f| f.before_table_row(row))
    }

    fn after_table_row(&mut self, row: &[String]) -> Result<()> {
        self.each(|f| f.after_table_row(row))
    }

    fn before_table_cell(&mut self, cell: &str) -> Result<()> {
        self.each(|f| f.before_table_cell(cell))
    }

    fn table_cell_value(&mut self, cell: &str) -> Result<()> {
        self.each(|f| f.table_cell_value(cell))
    }

    fn after_table_cell(&mut self, cell: &str) -> Result<()> {
        self.each(|f| f.after_table_cell(cell))
    }

    fn after_feature(&mut self, feature: &Feature) -> Result<()> {
        self.each(|f| f.after_feature(feature))
    }

    fn after_features(&mut self, features: &[Feature]) -> Result<()> {
        self.each(|f| f.after_features(features))
    }
}

#[cfg(test)]
mod spec {
    use super::Broadcast;
    use crate::Formatter as _;

    #[test]
    fn registration_is_counted() {
        let mut broadcast = Broadcast::new();
        assert!(broadcast.is_empty());

        broadcast.register(Broadcast::new());
        broadcast.register(Broadcast::new());
        assert_eq!(broadcast.len(), 2);
    }

    #[test]
    fn empty_broadcast_accepts_notifications() {
        let mut broadcast = Broadcast::new();

        assert!(broadcast.before_features(&[]).is_ok());
        assert!(broadcast.after_features(&[]).is_ok());
    }
}
