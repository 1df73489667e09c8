// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::retry::RetryStrategy;
use crate::solo;
use rop_core::{Outcome, RopError};
use std::error::Error;

/// Method-chaining form of the single-value combinators.
///
/// # Example
///
/// ```
/// use rop_core::Outcome;
/// use rop_solo::{validate, RailwayExt};
///
/// let message = validate(1, |v| *v < 3, "value more than 2")
///     .and_validate(|v| *v > 0, "a is less or 0!")
///     .map(|v| v * 100)
///     .finally(|v| format!("got {v}"), |e| format!("error: {e}"));
///
/// assert_eq!(message, "got 100");
/// ```
pub trait RailwayExt<T>: Sized {
    fn and_validate<P>(self, predicate: P, err_msg: impl Into<String>) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool;

    fn and_validate_with<E, C>(self, check: C) -> Outcome<T>
    where
        C: FnOnce(&T) -> Result<(), E>,
        E: Error + Send + Sync + 'static;

    fn and_validate_or_cancel<P>(self, predicate: P, cancel_msg: impl Into<String>) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool;

    fn switch<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>;

    fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U;

    fn tee<F>(self, side_effect: F) -> Outcome<T>
    where
        F: FnOnce(&T);

    fn tee_with<E, F>(self, side_effect: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Result<(), E>,
        E: Error + Send + Sync + 'static;

    fn double_tee<S, E>(self, on_success: S, on_error: E) -> Outcome<T>
    where
        S: FnOnce(&T),
        E: FnOnce(&RopError);

    fn double_map<U, S, F, C>(self, on_success: S, on_failure: F, on_cancel: C) -> Outcome<U>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(&RopError) -> U,
        C: FnOnce(&RopError) -> U;

    fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Error + Send + Sync + 'static;

    fn try_with_retry<U, E, S, F>(self, strategy: &S, f: F) -> Outcome<U>
    where
        S: RetryStrategy + ?Sized,
        F: FnMut(&T) -> Result<U, E>,
        E: Error + Send + Sync + 'static;

    fn check<P>(self, predicate: P, false_err_msg: impl Into<String>) -> Outcome<bool>
    where
        P: FnOnce(&T) -> bool;

    fn check_or_cancel<P>(self, predicate: P, false_cancel_msg: impl Into<String>) -> Outcome<bool>
    where
        P: FnOnce(&T) -> bool;

    fn finally<U, S, E>(self, on_success: S, on_fail_or_cancel: E) -> U
    where
        S: FnOnce(T) -> U,
        E: FnOnce(RopError) -> U;

    fn succeed_with<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> U;

    fn fail_with<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> RopError;

    fn cancel_with<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> RopError;
}

impl<T> RailwayExt<T> for Outcome<T> {
    fn and_validate<P>(self, predicate: P, err_msg: impl Into<String>) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
    {
        solo::and_validate(self, predicate, err_msg)
    }

    fn and_validate_with<E, C>(self, check: C) -> Outcome<T>
    where
        C: FnOnce(&T) -> Result<(), E>,
        E: Error + Send + Sync + 'static,
    {
        solo::and_validate_with(self, check)
    }

    fn and_validate_or_cancel<P>(self, predicate: P, cancel_msg: impl Into<String>) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
    {
        solo::and_validate_or_cancel(self, predicate, cancel_msg)
    }

    fn switch<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        solo::switch(self, f)
    }

    fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        solo::map(self, f)
    }

    fn tee<F>(self, side_effect: F) -> Outcome<T>
    where
        F: FnOnce(&T),
    {
        solo::tee(self, side_effect)
    }

    fn tee_with<E, F>(self, side_effect: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Result<(), E>,
        E: Error + Send + Sync + 'static,
    {
        solo::tee_with(self, side_effect)
    }

    fn double_tee<S, E>(self, on_success: S, on_error: E) -> Outcome<T>
    where
        S: FnOnce(&T),
        E: FnOnce(&RopError),
    {
        solo::double_tee(self, on_success, on_error)
    }

    fn double_map<U, S, F, C>(self, on_success: S, on_failure: F, on_cancel: C) -> Outcome<U>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(&RopError) -> U,
        C: FnOnce(&RopError) -> U,
    {
        solo::double_map(self, on_success, on_failure, on_cancel)
    }

    fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Error + Send + Sync + 'static,
    {
        solo::try_map(self, f)
    }

    fn try_with_retry<U, E, S, F>(self, strategy: &S, f: F) -> Outcome<U>
    where
        S: RetryStrategy + ?Sized,
        F: FnMut(&T) -> Result<U, E>,
        E: Error + Send + Sync + 'static,
    {
        crate::retry::try_with_retry(self, strategy, f)
    }

    fn check<P>(self, predicate: P, false_err_msg: impl Into<String>) -> Outcome<bool>
    where
        P: FnOnce(&T) -> bool,
    {
        solo::check(self, predicate, false_err_msg)
    }

    fn check_or_cancel<P>(self, predicate: P, false_cancel_msg: impl Into<String>) -> Outcome<bool>
    where
        P: FnOnce(&T) -> bool,
    {
        solo::check_or_cancel(self, predicate, false_cancel_msg)
    }

    fn finally<U, S, E>(self, on_success: S, on_fail_or_cancel: E) -> U
    where
        S: FnOnce(T) -> U,
        E: FnOnce(RopError) -> U,
    {
        solo::finally(self, on_success, on_fail_or_cancel)
    }

    fn succeed_with<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> U,
    {
        solo::succeed_with(self, f)
    }

    fn fail_with<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> RopError,
    {
        solo::fail_with(self, f)
    }

    fn cancel_with<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Outcome<T>) -> RopError,
    {
        solo::cancel_with(self, f)
    }
}
