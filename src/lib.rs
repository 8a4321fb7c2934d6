// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Replays a parsed [Gherkin] document tree as a strictly ordered stream of
//! legacy formatter notifications.
//!
//! Several independently written formatters can observe a single run of a
//! specification document: a [`Report`] walks the tree depth-first exactly
//! once and emits paired `before_X`/`after_X` notifications whose nesting
//! mirrors the document's structure, while a [`Broadcast`] fans every
//! notification out to all registered [`Formatter`]s in registration order.
//! Per-step outcomes enter the stream through an [`OutcomeSource`], so the
//! crate stays independent of how steps are actually executed, and parsing
//! is likewise someone else's job: the input is an already-built [`ast`]
//! tree.
//!
//! # Notification order
//!
//! The emitted sequence follows this fixed grammar (`*` marks repetition,
//! `[..]` optional blocks):
//!
//! ```text
//! before_features
//!   ( before_feature
//!       before_tags after_tags
//!       feature_name
//!       [ before_background background_name [steps] after_background ]
//!       ( before_feature_element
//!           before_tags after_tags
//!           scenario_name
//!           [steps]
//!           [ before_examples_array
//!               ( before_examples
//!                   examples_name
//!                   before_outline_table
//!                     ( before_table_row
//!                         ( before_table_cell
//!                             table_cell_value
//!                           after_table_cell )*
//!                       after_table_row )*
//!                   after_outline_table
//!                 after_examples )*
//!             after_examples_array ]
//!         after_feature_element )*
//!     after_feature )*
//! after_features
//!
//! steps (omitted entirely for an empty step list):
//! before_steps
//!   ( before_step
//!       before_step_result
//!         step_name
//!         [ exception ]     <- iff the step's outcome is a failure
//!       after_step_result
//!     after_step )*
//! after_steps
//! ```
//!
//! Tag brackets and the examples-array brackets are emitted even when empty.
//! Any reordering, omission or extra notification is a breaking change:
//! formatters depend on this exact contract.
//!
//! # Example
//!
//! ```rust
//! use gherkin_report::{
//!     ast::{Element, Feature, Scenario, Step},
//!     Basic, Broadcast, Report, StepResult,
//! };
//!
//! let features = [Feature {
//!     name: "Hungry".into(),
//!     elements: vec![Element::Scenario(Scenario {
//!         name: "eating".into(),
//!         steps: vec![Step::new("When", "I eat 5 cucumbers")],
//!         ..Scenario::default()
//!     })],
//!     ..Feature::default()
//! }];
//!
//! let mut formatters = Broadcast::new();
//! formatters.register(Basic::stdout());
//!
//! let mut source = |_: &Step| Ok(StepResult::passed());
//! Report::new(formatters)
//!     .run(&features, &mut source)
//!     .expect("run aborted");
//! ```
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

#![deny(nonstandard_style, rustdoc::all, trivial_casts, trivial_numeric_casts)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    missing_docs,
    unused,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod ast;
pub mod error;
pub mod formatter;
pub mod report;
pub mod result;

pub use self::{
    error::{Error, Result},
    formatter::{Basic, Broadcast, Formatter},
    report::{ElementReport, OutcomeSource, Report},
    result::{any_failed, Location, Status, StepFailure, StepResult},
};
