// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outcomes of executed [`Step`]s.
//!
//! A [`StepResult`] is produced by an [`OutcomeSource`] as the traversal
//! visits each [`Step`], decides which notifications are emitted for that
//! step, and is discarded afterwards. Only its [`Status`] is retained, for
//! answering the failed predicate of the containing element.
//!
//! [`OutcomeSource`]: crate::OutcomeSource
//! [`Step`]: crate::ast::Step

use derive_more::with_trait::Display;

/// Outcome status of a single executed [`Step`].
///
/// [`Step`]: crate::ast::Step
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// [`Step`] implementation ran and succeeded.
    ///
    /// [`Step`]: crate::ast::Step
    #[display("passed")]
    Passed,

    /// [`Step`] implementation ran and failed.
    ///
    /// [`Step`]: crate::ast::Step
    #[display("failed")]
    Failed,

    /// [`Step`] implementation is declared but not yet written.
    ///
    /// [`Step`]: crate::ast::Step
    #[display("pending")]
    Pending,

    /// [`Step`] was not run (an earlier step failed, or it was filtered
    /// out).
    ///
    /// [`Step`]: crate::ast::Step
    #[display("skipped")]
    Skipped,

    /// No implementation matches the [`Step`].
    ///
    /// [`Step`]: crate::ast::Step
    #[display("undefined")]
    Undefined,
}

impl Status {
    /// Indicates whether this [`Status`] is a [`Status::Failed`].
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Indicates whether at least one of the given `statuses` is a
/// [`Status::Failed`].
///
/// This is the whole failed predicate of any container: [`Pending`],
/// [`Skipped`] and [`Undefined`] outcomes never fail a scenario or feature.
///
/// [`Pending`]: Status::Pending
/// [`Skipped`]: Status::Skipped
/// [`Undefined`]: Status::Undefined
pub fn any_failed(statuses: impl IntoIterator<Item = Status>) -> bool {
    statuses.into_iter().any(Status::is_failed)
}

/// Failure captured from a [`Status::Failed`] [`Step`].
///
/// A plain value standing in for whatever the step implementation raised,
/// so the traversal's control flow stays linear.
///
/// [`Step`]: crate::ast::Step
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{message}")]
pub struct StepFailure {
    /// Human-readable description of the failure.
    pub message: String,

    /// [`Location`] the failure originated from, if known.
    pub location: Option<Location>,
}

impl StepFailure {
    /// Creates a new [`StepFailure`] out of the given `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }
}

/// Location of a failure in a source file.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display("{path}:{line}")]
pub struct Location {
    /// Path to the source file.
    pub path: String,

    /// Line inside the source file.
    pub line: u32,
}

/// Result of executing a single [`Step`], as reported by an
/// [`OutcomeSource`].
///
/// [`OutcomeSource`]: crate::OutcomeSource
/// [`Step`]: crate::ast::Step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// Outcome [`Status`] of the [`Step`].
    ///
    /// [`Step`]: crate::ast::Step
    pub status: Status,

    /// Captured [`StepFailure`], for a [`Status::Failed`] outcome.
    pub failure: Option<StepFailure>,
}

impl StepResult {
    /// Creates a [`Status::Passed`] [`StepResult`].
    #[must_use]
    pub const fn passed() -> Self {
        Self {
            status: Status::Passed,
            failure: None,
        }
    }

    /// Creates a [`Status::Pending`] [`StepResult`].
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            status: Status::Pending,
            failure: None,
        }
    }

    /// Creates a [`Status::Skipped`] [`StepResult`].
    #[must_use]
    pub const fn skipped() -> Self {
        Self {
            status: Status::Skipped,
            failure: None,
        }
    }

    /// Creates a [`Status::Undefined`] [`StepResult`].
    #[must_use]
    pub const fn undefined() -> Self {
        Self {
            status: Status::Undefined,
            failure: None,
        }
    }

    /// Creates a [`Status::Failed`] [`StepResult`] carrying the given
    /// `failure`.
    #[must_use]
    pub const fn failed(failure: StepFailure) -> Self {
        Self {
            status: Status::Failed,
            failure: Some(failure),
        }
    }

    /// Indicates whether this [`StepResult`]'s [`Status`] is a
    /// [`Status::Failed`].
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.status.is_failed()
    }
}

#[cfg(test)]
mod spec {
    use super::{any_failed, Location, Status, StepFailure, StepResult};

    #[test]
    fn only_failed_aggregates() {
        assert!(!any_failed([]));
        assert!(!any_failed([
            Status::Passed,
            Status::Pending,
            Status::Skipped,
            Status::Undefined,
        ]));
        assert!(any_failed([Status::Passed, Status::Failed]));
    }

    #[test]
    fn constructors_fill_status_and_failure() {
        assert_eq!(StepResult::passed().status, Status::Passed);
        assert_eq!(StepResult::pending().status, Status::Pending);
        assert_eq!(StepResult::skipped().status, Status::Skipped);
        assert_eq!(StepResult::undefined().status, Status::Undefined);
        assert!(StepResult::passed().failure.is_none());

        let failed = StepResult::failed(StepFailure::new("boom"));
        assert!(failed.is_failed());
        assert_eq!(failed.failure.as_ref().map(ToString::to_string), Some("boom".to_owned()));
    }

    #[test]
    fn displays_are_lowercase_and_located() {
        assert_eq!(Status::Undefined.to_string(), "undefined");
        let loc = Location {
            path: "features/eating.feature".into(),
            line: 4,
        };
        assert_eq!(loc.to_string(), "features/eating.feature:4");
    }
}
