// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-value combinators.
//!
//! Every function takes one value or one [`Outcome`] and returns the next
//! outcome. `Failure` and `Cancelled` inputs pass through untouched (retagged
//! to the output type) unless the function says otherwise.

use rop_core::{Outcome, RopError};
use std::error::Error;

/// `Success(input)` if `predicate` holds, `Failure(Validation(err_msg))`
/// otherwise.
///
/// # Example
///
/// ```
/// use rop_solo::validate;
///
/// let ok = validate(2, |v| *v < 3, "value more than 2");
/// let rejected = validate(5, |v| *v < 3, "value more than 2");
///
/// assert!(ok.is_success());
/// assert_eq!(rejected.error().map(ToString::to_string).as_deref(), Some("value more than 2"));
/// ```
pub fn validate<T, P>(input: T, predicate: P, err_msg: impl Into<String>) -> Outcome<T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&input) {
        Outcome::success(input)
    } else {
        Outcome::failure(RopError::validation(err_msg))
    }
}

/// Validate with a check that explains its rejection.
pub fn validate_with<T, E, C>(input: T, check: C) -> Outcome<T>
where
    C: FnOnce(&T) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    match check(&input) {
        Ok(()) => Outcome::success(input),
        Err(e) => Outcome::failure(RopError::user(e)),
    }
}

/// Like [`validate`], but a rejected value is cancelled rather than failed.
pub fn validate_or_cancel<T, P>(input: T, predicate: P, cancel_msg: impl Into<String>) -> Outcome<T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&input) {
        Outcome::success(input)
    } else {
        Outcome::cancelled(RopError::cancellation(cancel_msg))
    }
}

/// Re-validate the value of a successful outcome.
pub fn and_validate<T, P>(input: Outcome<T>, predicate: P, err_msg: impl Into<String>) -> Outcome<T>
where
    P: FnOnce(&T) -> bool,
{
    match input.railway() {
        Ok(value) => validate(value, predicate, err_msg),
        Err(passthrough) => passthrough,
    }
}

pub fn and_validate_with<T, E, C>(input: Outcome<T>, check: C) -> Outcome<T>
where
    C: FnOnce(&T) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    match input.railway() {
        Ok(value) => validate_with(value, check),
        Err(passthrough) => passthrough,
    }
}

pub fn and_validate_or_cancel<T, P>(
    input: Outcome<T>,
    predicate: P,
    cancel_msg: impl Into<String>,
) -> Outcome<T>
where
    P: FnOnce(&T) -> bool,
{
    match input.railway() {
        Ok(value) => validate_or_cancel(value, predicate, cancel_msg),
        Err(passthrough) => passthrough,
    }
}

/// Continue with a function that may itself fail.
pub fn switch<T, U, F>(input: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> Outcome<U>,
{
    match input.railway() {
        Ok(value) => f(value),
        Err(retagged) => retagged,
    }
}

/// Transform the value of a successful outcome.
pub fn map<T, U, F>(input: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    match input.railway() {
        Ok(value) => Outcome::success(f(value)),
        Err(retagged) => retagged,
    }
}

/// Run a side effect on success. The outcome is returned unchanged.
pub fn tee<T, F>(input: Outcome<T>, side_effect: F) -> Outcome<T>
where
    F: FnOnce(&T),
{
    if let Outcome::Success(value) = &input {
        side_effect(value);
    }
    input
}

/// Run a fallible side effect on success; its error fails the outcome.
pub fn tee_with<T, E, F>(input: Outcome<T>, side_effect: F) -> Outcome<T>
where
    F: FnOnce(&T) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    if let Outcome::Success(value) = &input {
        if let Err(e) = side_effect(value) {
            return Outcome::failure(RopError::user(e));
        }
    }
    input
}

/// Observe either track. The outcome is returned unchanged.
pub fn double_tee<T, S, E>(input: Outcome<T>, on_success: S, on_error: E) -> Outcome<T>
where
    S: FnOnce(&T),
    E: FnOnce(&RopError),
{
    match &input {
        Outcome::Success(value) => on_success(value),
        Outcome::Failure(error) | Outcome::Cancelled(error) => on_error(error),
    }
    input
}

/// Map each track with its own handler.
///
/// Exactly one handler runs. A success is mapped to `Success(on_success(v))`.
/// For `Failure` and `Cancelled` the matching handler is invoked for its side
/// effect only: its return value is dropped and the original error comes back
/// under the original tag.
pub fn double_map<T, U, S, F, C>(
    input: Outcome<T>,
    on_success: S,
    on_failure: F,
    on_cancel: C,
) -> Outcome<U>
where
    S: FnOnce(T) -> U,
    F: FnOnce(&RopError) -> U,
    C: FnOnce(&RopError) -> U,
{
    match input {
        Outcome::Success(value) => Outcome::success(on_success(value)),
        Outcome::Failure(error) => {
            let _discarded = on_failure(&error);
            Outcome::failure(error)
        }
        Outcome::Cancelled(error) => {
            let _discarded = on_cancel(&error);
            Outcome::cancelled(error)
        }
    }
}

/// Transform the value with a fallible function; its error fails the outcome.
pub fn try_map<T, U, E, F>(input: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> Result<U, E>,
    E: Error + Send + Sync + 'static,
{
    match input.railway() {
        Ok(value) => match f(value) {
            Ok(out) => Outcome::success(out),
            Err(e) => Outcome::failure(RopError::user(e)),
        },
        Err(retagged) => retagged,
    }
}

/// Reduce a successful outcome to `Success(true)` or a failure.
pub fn check<T, P>(
    input: Outcome<T>,
    predicate: P,
    false_err_msg: impl Into<String>,
) -> Outcome<bool>
where
    P: FnOnce(&T) -> bool,
{
    match input.railway() {
        Ok(value) => {
            if predicate(&value) {
                Outcome::success(true)
            } else {
                Outcome::failure(RopError::validation(false_err_msg))
            }
        }
        Err(retagged) => retagged,
    }
}

pub fn check_or_cancel<T, P>(
    input: Outcome<T>,
    predicate: P,
    false_cancel_msg: impl Into<String>,
) -> Outcome<bool>
where
    P: FnOnce(&T) -> bool,
{
    match input.railway() {
        Ok(value) => {
            if predicate(&value) {
                Outcome::success(true)
            } else {
                Outcome::cancelled(RopError::cancellation(false_cancel_msg))
            }
        }
        Err(retagged) => retagged,
    }
}

/// Leave the railway: collapse both tracks into a plain value.
pub fn finally<T, U, S, E>(input: Outcome<T>, on_success: S, on_fail_or_cancel: E) -> U
where
    S: FnOnce(T) -> U,
    E: FnOnce(RopError) -> U,
{
    match input {
        Outcome::Success(value) => on_success(value),
        Outcome::Failure(error) | Outcome::Cancelled(error) => on_fail_or_cancel(error),
    }
}

/// `Success(f(input))`, whatever the state of `input`.
pub fn succeed_with<T, U, F>(input: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(Outcome<T>) -> U,
{
    Outcome::success(f(input))
}

/// `Failure(f(input))`, whatever the state of `input`.
pub fn fail_with<T, U, F>(input: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(Outcome<T>) -> RopError,
{
    Outcome::failure(f(input))
}

/// `Cancelled(f(input))`, whatever the state of `input`.
///
/// The streaming operators use this to turn elements into cancellations once
/// their token fires.
pub fn cancel_with<T, U, F>(input: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(Outcome<T>) -> RopError,
{
    Outcome::cancelled(f(input))
}
