// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Failures aborting a [`Report`] run.
//!
//! A [`Step`] legitimately failing is not an [`Error`]: it's expected data,
//! carried by a [`StepResult`] and surfaced through the
//! [`Formatter::exception()`] notification. [`Error`]s are the two fatal
//! conditions: the outcome source itself breaking, and a registered
//! [`Formatter`] failing to handle a notification.
//!
//! [`Formatter`]: crate::Formatter
//! [`Formatter::exception()`]: crate::Formatter::exception()
//! [`Report`]: crate::Report
//! [`Step`]: crate::ast::Step
//! [`StepResult`]: crate::StepResult

use std::io;

use derive_more::with_trait::Display;

/// Boxed source of an [`Error`].
type Source = Box<dyn std::error::Error + Send + Sync>;

/// Alias of a [`Result`](std::result::Result) with an [`Error`] inside.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure aborting a [`Report`] run.
///
/// Neither variant is recovered from: the traversal stops where the failure
/// happened, without emitting closing notifications for in-progress nodes.
///
/// [`Report`]: crate::Report
#[derive(Debug, Display)]
pub enum Error {
    /// [`OutcomeSource`] failed to produce a [`StepResult`].
    ///
    /// [`OutcomeSource`]: crate::OutcomeSource
    /// [`StepResult`]: crate::StepResult
    #[display("step outcome retrieval failed: {_0}")]
    Outcome(Source),

    /// Registered [`Formatter`] failed while handling a notification.
    ///
    /// [`Formatter`]: crate::Formatter
    #[display("formatter failed: {_0}")]
    Formatter(Source),
}

// Not derived: `Box<dyn Error>` itself doesn't implement `Error`, so the
// source has to be re-borrowed by hand.
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Outcome(src) | Self::Formatter(src) => {
                let src: &(dyn std::error::Error + 'static) = src.as_ref();
                Some(src)
            }
        }
    }
}

impl Error {
    /// Wraps the given `err` into an [`Error::Outcome`].
    #[must_use]
    pub fn outcome(err: impl Into<Source>) -> Self {
        Self::Outcome(err.into())
    }

    /// Wraps the given `err` into an [`Error::Formatter`].
    #[must_use]
    pub fn formatter(err: impl Into<Source>) -> Self {
        Self::Formatter(err.into())
    }
}

// Formatters are the only I/O-performing party, so a bare `io::Error` is
// always one of theirs.
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Formatter(err.into())
    }
}

#[cfg(test)]
mod spec {
    use std::{error::Error as _, io};

    use super::Error;

    #[test]
    fn keeps_source_chain() {
        let err =
            Error::outcome(io::Error::new(io::ErrorKind::Other, "registry gone"));

        assert_eq!(
            err.to_string(),
            "step outcome retrieval failed: registry gone",
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn io_errors_belong_to_formatters() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "pipe closed"));

        assert!(matches!(err, Error::Formatter(_)));
    }
}
