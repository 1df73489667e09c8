// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Error types for railway-oriented outcomes
//!
//! Every failed or cancelled `Outcome` carries a [`RopError`]. The error never
//! travels as a panic or as an `Err` across a stream boundary: operators store
//! it inside the outcome and keep going.
//!
//! # Examples
//!
//! ```
//! use rop_error::RopError;
//!
//! let err = RopError::validation("value more than 2");
//! assert_eq!(err.to_string(), "value more than 2");
//! assert!(!err.is_cancellation());
//! ```

use std::error::Error;
use std::sync::Arc;

/// Root error type carried by `Failure` and `Cancelled` outcomes.
///
/// Display strings are the bare messages (no prefix) so that terminal
/// handlers can format them the way they like.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RopError {
    /// A predicate rejected the value
    #[error("{message}")]
    Validation {
        /// Message supplied by the caller of the validating combinator
        message: String,
    },

    /// Cancellation was observed, or a cancel-on-false check rejected the value
    #[error("{message}")]
    Cancellation {
        /// Why the value was cancelled
        message: String,
    },

    /// Every alternative of an OR group failed
    ///
    /// Errors are kept flat and in the order the alternatives ran. Display
    /// joins the messages with a newline.
    #[error("{}", join_messages(.errors))]
    Aggregate {
        /// The branch errors, in branch order
        errors: Vec<RopError>,
    },

    /// A group was run without any step
    #[error("empty result")]
    EmptyGroup,

    /// Error returned by a user-supplied function
    #[error("{0}")]
    User(Arc<dyn Error + Send + Sync>),
}

fn join_messages(errors: &[RopError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl RopError {
    /// Create a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a cancellation error with the given message
    pub fn cancellation(message: impl Into<String>) -> Self {
        Self::Cancellation {
            message: message.into(),
        }
    }

    /// Wrap an error produced by user code.
    ///
    /// A `RopError` handed back by user code is returned as is instead of
    /// being wrapped a second time.
    pub fn user(error: impl Error + Send + Sync + 'static) -> Self {
        let boxed: Box<dyn Error + Send + Sync> = Box::new(error);
        match boxed.downcast::<RopError>() {
            Ok(rop) => *rop,
            Err(other) => Self::User(Arc::from(other)),
        }
    }

    /// Join two errors into an aggregate, flattening nested aggregates.
    #[must_use]
    pub fn join(self, other: RopError) -> Self {
        let mut errors = self.into_errors();
        errors.extend(other.into_errors());
        Self::Aggregate { errors }
    }

    /// Build an aggregate out of branch errors, flattening nested aggregates.
    pub fn aggregate(errors: impl IntoIterator<Item = RopError>) -> Self {
        Self::Aggregate {
            errors: errors.into_iter().flat_map(Self::into_errors).collect(),
        }
    }

    /// The individual errors this error stands for.
    ///
    /// An aggregate yields its branch errors, any other error yields itself.
    #[must_use]
    pub fn errors(&self) -> &[RopError] {
        match self {
            Self::Aggregate { errors } => errors,
            other => std::slice::from_ref(other),
        }
    }

    fn into_errors(self) -> Vec<RopError> {
        match self {
            Self::Aggregate { errors } => errors,
            other => vec![other],
        }
    }

    /// Returns `true` for [`RopError::Cancellation`]
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancellation { .. })
    }

    /// Returns `true` for [`RopError::Aggregate`]
    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate { .. })
    }

    /// The user error behind a [`RopError::User`], if any
    #[must_use]
    pub fn user_source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::User(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

// User errors are opaque; two of them are equal when they read the same.
impl PartialEq for RopError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation { message: a }, Self::Validation { message: b }) => a == b,
            (Self::Cancellation { message: a }, Self::Cancellation { message: b }) => a == b,
            (Self::Aggregate { errors: a }, Self::Aggregate { errors: b }) => a == b,
            (Self::EmptyGroup, Self::EmptyGroup) => true,
            (Self::User(a), Self::User(b)) => Arc::ptr_eq(a, b) || a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl Eq for RopError {}

/// Specialized Result type for rop operations
pub type Result<T> = std::result::Result<T, RopError>;

/// Extension trait for converting arbitrary errors into [`RopError`]
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoRopError {
    /// Convert this error into a `RopError`
    fn into_rop_error(self) -> RopError;
}

impl<E: Error + Send + Sync + 'static> IntoRopError for E {
    fn into_rop_error(self) -> RopError {
        RopError::user(self)
    }
}
