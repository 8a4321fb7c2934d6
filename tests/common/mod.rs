#![allow(dead_code)]

//! Support code shared by the integration tests: a recording [`Formatter`]
//! and terse document builders.

use std::{cell::RefCell, io, rc::Rc};

use gherkin_report::{
    ast::{Background, Element, Examples, Feature, Outline, Scenario, Step, Table},
    report::ElementReport,
    Error, Formatter, Result, StepFailure, StepResult,
};

/// Shared log of notification names, in delivery order.
pub type Log = Rc<RefCell<Vec<String>>>;

/// Creates a new empty [`Log`].
pub fn log() -> Log {
    Log::default()
}

/// Snapshot of the given [`Log`]'s entries.
pub fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// [`Formatter`] recording every received notification's name into a shared
/// [`Log`], optionally under an `id:` prefix, optionally erroring right
/// after recording a chosen notification.
pub struct Recorder {
    log: Log,
    prefix: String,
    fail_at: Option<&'static str>,
}

impl Recorder {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
            prefix: String::new(),
            fail_at: None,
        }
    }

    /// Prefixes every recorded name with `id:`, to tell formatters apart in
    /// a shared [`Log`].
    pub fn tagged(log: &Log, id: &str) -> Self {
        Self {
            prefix: format!("{id}:"),
            ..Self::new(log)
        }
    }

    /// Makes this [`Recorder`] return an [`Error`] right after recording the
    /// notification called `name`.
    pub fn failing_at(mut self, name: &'static str) -> Self {
        self.fail_at = Some(name);
        self
    }

    fn notify(&mut self, name: &'static str) -> Result<()> {
        self.log.borrow_mut().push(format!("{}{name}", self.prefix));
        if self.fail_at == Some(name) {
            return Err(Error::formatter(io::Error::new(
                io::ErrorKind::Other,
                format!("refusing to handle `{name}`"),
            )));
        }
        Ok(())
    }
}

impl Formatter for Recorder {
    fn before_features(&mut self, _: &[Feature]) -> Result<()> {
        self.notify("before_features")
    }

    fn before_feature(&mut self, _: &Feature) -> Result<()> {
        self.notify("before_feature")
    }

    fn before_tags(&mut self, _: &[String]) -> Result<()> {
        self.notify("before_tags")
    }

    fn after_tags(&mut self, _: &[String]) -> Result<()> {
        self.notify("after_tags")
    }

    fn feature_name(&mut self, _: &str) -> Result<()> {
        self.notify("feature_name")
    }

    fn before_background(&mut self, _: &Background) -> Result<()> {
        self.notify("before_background")
    }

    fn background_name(&mut self, _: &str) -> Result<()> {
        self.notify("background_name")
    }

    fn after_background(&mut self, _: &Background) -> Result<()> {
        self.notify("after_background")
    }

    fn before_feature_element(&mut self, _: &Element) -> Result<()> {
        self.notify("before_feature_element")
    }

    fn scenario_name(&mut self, _: &str) -> Result<()> {
        self.notify("scenario_name")
    }

    fn after_feature_element(&mut self, _: &ElementReport<'_>) -> Result<()> {
        self.notify("after_feature_element")
    }

    fn before_steps(&mut self, _: &[Step]) -> Result<()> {
        self.notify("before_steps")
    }

    fn after_steps(&mut self, _: &[Step]) -> Result<()> {
        self.notify("after_steps")
    }

    fn before_step(&mut self, _: &Step) -> Result<()> {
        self.notify("before_step")
    }

    fn before_step_result(&mut self, _: &Step, _: &StepResult) -> Result<()> {
        self.notify("before_step_result")
    }

    fn step_name(&mut self, _: &Step, _: &StepResult) -> Result<()> {
        self.notify("step_name")
    }

    fn exception(&mut self, _: &StepFailure) -> Result<()> {
        self.notify("exception")
    }

    fn after_step_result(&mut self, _: &Step, _: &StepResult) -> Result<()> {
        self.notify("after_step_result")
    }

    fn after_step(&mut self, _: &Step) -> Result<()> {
        self.notify("after_step")
    }

    fn before_examples_array(&mut self, _: &[Examples]) -> Result<()> {
        self.notify("before_examples_array")
    }

    fn after_examples_array(&mut self, _: &[Examples]) -> Result<()> {
        self.notify("after_examples_array")
    }

    fn before_examples(&mut self, _: &Examples) -> Result<()> {
        self.notify("before_examples")
    }

    fn examples_name(&mut self, _: &str) -> Result<()> {
        self.notify("examples_name")
    }

    fn after_examples(&mut self, _: &Examples) -> Result<()> {
        self.notify("after_examples")
    }

    fn before_outline_table(&mut self, _: &Table) -> Result<()> {
        self.notify("before_outline_table")
    }

    fn after_outline_table(&mut self, _: &Table) -> Result<()> {
        self.notify("after_outline_table")
    }

    fn before_table_row(&mut self, _: &[String]) -> Result<()> {
        self.notify("before_table_row")
    }

    fn after_table_row(&mut self, _: &[String]) -> Result<()> {
        self.notify("after_table_row")
    }

    fn before_table_cell(&mut self, _: &str) -> Result<()> {
        self.notify("before_table_cell")
    }

    fn table_cell_value(&mut self, _: &str) -> Result<()> {
        self.notify("table_cell_value")
    }

    fn after_table_cell(&mut self, _: &str) -> Result<()> {
        self.notify("after_table_cell")
    }

    fn after_feature(&mut self, _: &Feature) -> Result<()> {
        self.notify("after_feature")
    }

    fn after_features(&mut self, _: &[Feature]) -> Result<()> {
        self.notify("after_features")
    }
}

/// Outcome source passing every step whose text doesn't contain `fail`, and
/// failing the rest with a `boom` failure.
pub fn outcomes(step: &Step) -> Result<StepResult> {
    Ok(if step.value.contains("fail") {
        StepResult::failed(StepFailure::new("boom"))
    } else {
        StepResult::passed()
    })
}

pub fn feature(elements: Vec<Element>) -> Feature {
    Feature {
        name: "Hungry".into(),
        elements,
        ..Feature::default()
    }
}

pub fn background(steps: Vec<Step>) -> Background {
    Background {
        name: "preparing cucumbers".into(),
        steps,
    }
}

pub fn scenario(steps: Vec<Step>) -> Element {
    Element::Scenario(Scenario {
        name: "eating".into(),
        steps,
        ..Scenario::default()
    })
}

pub fn outline(steps: Vec<Step>, examples: Vec<Examples>) -> Element {
    Element::Outline(Outline {
        name: "eating lots".into(),
        steps,
        examples,
        ..Outline::default()
    })
}

pub fn examples(rows: Vec<Vec<&str>>) -> Examples {
    Examples {
        name: String::new(),
        table: Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(ToOwned::to_owned).collect())
                .collect(),
        },
    }
}

pub fn step(value: &str) -> Step {
    Step::new("Given", value)
}
