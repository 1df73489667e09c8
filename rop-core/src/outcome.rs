// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::reviewed::Reviewed;
use rop_error::RopError;

/// The result of one step on the railway.
///
/// An outcome is exactly one of three states. `Success` is the only state
/// from which further computation happens; `Failure` and `Cancelled` are
/// absorbing: combinators only retag them to the next value type, keeping the
/// error and the cancel tag untouched (see [`Outcome::railway`]).
///
/// # Examples
///
/// ```
/// use rop_core::{Outcome, RopError};
///
/// let ok = Outcome::success(3);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&3));
///
/// let failed: Outcome<i32> = Outcome::failure(RopError::validation("too big"));
/// let retagged: Outcome<String> = failed.railway::<String>().unwrap_err();
/// assert_eq!(retagged.error().map(ToString::to_string), Some("too big".to_string()));
/// assert!(!retagged.is_cancelled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The computation produced a value
    Success(T),
    /// The computation was rejected
    Failure(RopError),
    /// The computation was cancelled
    Cancelled(RopError),
}

impl<T> Outcome<T> {
    /// Wraps a value as a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error as a failure.
    pub const fn failure(error: RopError) -> Self {
        Self::Failure(error)
    }

    /// Wraps an error as a cancellation.
    pub const fn cancelled(error: RopError) -> Self {
        Self::Cancelled(error)
    }

    /// Returns `true` if this is a `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is `Cancelled`.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// The success value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Cancelled(_) => None,
        }
    }

    /// Converts into the success value, discarding errors.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Cancelled(_) => None,
        }
    }

    /// The error of a `Failure` or `Cancelled` outcome.
    pub const fn error(&self) -> Option<&RopError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) | Self::Cancelled(error) => Some(error),
        }
    }

    /// Converts into the error, discarding a success value.
    pub fn into_error(self) -> Option<RopError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) | Self::Cancelled(error) => Some(error),
        }
    }

    /// Splits the outcome into the value to keep working on, or the same
    /// non-success outcome retagged to `U`.
    ///
    /// This is the single place where "retag without losing the error"
    /// happens; every propagating combinator goes through it.
    pub fn railway<U>(self) -> Result<T, Outcome<U>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(Outcome::Failure(error)),
            Self::Cancelled(error) => Err(Outcome::Cancelled(error)),
        }
    }

    /// Marks this outcome as explicitly accepted by a reviewer.
    pub const fn accept(self) -> Reviewed<T> {
        Reviewed::new(self, true)
    }

    /// Hands this outcome on without accepting it.
    pub const fn pass(self) -> Reviewed<T> {
        Reviewed::new(self, false)
    }

    /// Returns the success value, panicking otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure` or `Cancelled`.
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(e) => panic!("called `Outcome::unwrap()` on a `Failure` value: {e:?}"),
            Self::Cancelled(e) => {
                panic!("called `Outcome::unwrap()` on a `Cancelled` value: {e:?}")
            }
        }
    }

    /// Returns the success value, panicking with `msg` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure` or `Cancelled`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(e) | Self::Cancelled(e) => panic!("{msg}: {e:?}"),
        }
    }
}

impl<T> From<Result<T, RopError>> for Outcome<T> {
    fn from(result: Result<T, RopError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, RopError> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) | Outcome::Cancelled(error) => Err(error),
        }
    }
}
