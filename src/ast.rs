// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Document tree of a parsed specification.
//!
//! The tree is built once per run by a parsing collaborator and is read-only
//! input to a [`Report`]: the traversal borrows it and never mutates it.
//! Structural validity (every [`Table`] having a header row, and so on) is
//! the producer's responsibility.
//!
//! [`Report`]: crate::Report

use derive_more::with_trait::Display;

/// Single feature of a specification document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feature {
    /// Name of this [`Feature`].
    pub name: String,

    /// [Tag]s attached to this [`Feature`].
    ///
    /// [Tag]: https://cucumber.io/docs/cucumber/api#tags
    pub tags: Vec<String>,

    /// [`Background`] of this [`Feature`], if declared.
    pub background: Option<Background>,

    /// Scenario-like [`Element`]s of this [`Feature`], in document order.
    pub elements: Vec<Element>,
}

/// [Background] block of a [`Feature`], run once per feature before any of
/// its scenarios.
///
/// [Background]: https://cucumber.io/docs/gherkin/reference#background
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Background {
    /// Name of this [`Background`].
    pub name: String,

    /// [`Step`]s of this [`Background`].
    pub steps: Vec<Step>,
}

/// Scenario-like element of a [`Feature`]: either a plain [`Scenario`] or a
/// [Scenario Outline].
///
/// [Scenario Outline]: https://cucumber.io/docs/gherkin/reference#scenario-outline
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// Plain [`Scenario`].
    Scenario(Scenario),

    /// [`Outline`] with its [`Examples`] tables.
    Outline(Outline),
}

impl Element {
    /// Name of this [`Element`].
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scenario(sc) => &sc.name,
            Self::Outline(outline) => &outline.name,
        }
    }

    /// Tags attached to this [`Element`].
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Scenario(sc) => &sc.tags,
            Self::Outline(outline) => &outline.tags,
        }
    }

    /// [`Step`]s of this [`Element`].
    ///
    /// For an [`Element::Outline`] these may contain `<placeholder>` tokens;
    /// resolving them against [`Examples`] rows is the execution engine's
    /// concern, not this crate's.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        match self {
            Self::Scenario(sc) => &sc.steps,
            Self::Outline(outline) => &outline.steps,
        }
    }

    /// [`Examples`] tables of this [`Element`], if it's an
    /// [`Element::Outline`].
    #[must_use]
    pub fn examples(&self) -> Option<&[Examples]> {
        match self {
            Self::Scenario(_) => None,
            Self::Outline(outline) => Some(&outline.examples),
        }
    }
}

/// Single [Scenario] of a [`Feature`].
///
/// [Scenario]: https://cucumber.io/docs/gherkin/reference#example
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Name of this [`Scenario`].
    pub name: String,

    /// Tags attached to this [`Scenario`].
    pub tags: Vec<String>,

    /// [`Step`]s of this [`Scenario`].
    pub steps: Vec<Step>,
}

/// [Scenario Outline]: a scenario template whose steps are resolved against
/// one or more [`Examples`] tables.
///
/// [Scenario Outline]: https://cucumber.io/docs/gherkin/reference#scenario-outline
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
    /// Name of this [`Outline`].
    pub name: String,

    /// Tags attached to this [`Outline`].
    pub tags: Vec<String>,

    /// Template [`Step`]s of this [`Outline`].
    pub steps: Vec<Step>,

    /// [`Examples`] tables of this [`Outline`], in document order.
    pub examples: Vec<Examples>,
}

/// [Examples] table of an [`Outline`].
///
/// [Examples]: https://cucumber.io/docs/gherkin/reference#examples
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Examples {
    /// Name of this [`Examples`] table.
    pub name: String,

    /// [`Table`] of this [`Examples`].
    pub table: Table,
}

/// Table of example rows, the first row being the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Rows of this [`Table`], each an ordered list of cell values.
    pub rows: Vec<Vec<String>>,
}

/// Single step of a [`Scenario`], [`Outline`] or [`Background`].
#[derive(Clone, Debug, Default, Display, PartialEq, Eq)]
#[display("{keyword} {value}")]
pub struct Step {
    /// Keyword of this [`Step`] (`Given`, `When`, `Then`, ...).
    pub keyword: String,

    /// Text of this [`Step`] following its [`Step::keyword`].
    pub value: String,
}

impl Step {
    /// Creates a new [`Step`] out of the given `keyword` and `value`.
    #[must_use]
    pub fn new(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Element, Examples, Outline, Scenario, Step};

    #[test]
    fn step_displays_keyword_and_value() {
        let step = Step::new("Given", "3 cucumbers");

        assert_eq!(step.to_string(), "Given 3 cucumbers");
    }

    #[test]
    fn element_accessors_cover_both_variants() {
        let scenario = Element::Scenario(Scenario {
            name: "eating".into(),
            tags: vec!["@wip".into()],
            steps: vec![Step::new("When", "I eat")],
        });
        let outline = Element::Outline(Outline {
            name: "grazing".into(),
            examples: vec![Examples::default()],
            ..Outline::default()
        });

        assert_eq!(scenario.name(), "eating");
        assert_eq!(scenario.tags(), ["@wip".to_owned()]);
        assert_eq!(scenario.steps().len(), 1);
        assert!(scenario.examples().is_none());

        assert_eq!(outline.name(), "grazing");
        assert!(outline.tags().is_empty());
        assert_eq!(outline.examples().map(<[Examples]>::len), Some(1));
    }
}
