// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-value combinators lifted onto streams.
//!
//! Each operator spawns one task and returns its output [`Pipe`]. The task
//! handles one element at a time, so the output has the same length and the
//! same order as the input.
//!
//! The `cancel` argument turns an element into the error of a `Cancelled`
//! outcome. It is used for every element received after the token fired: the
//! operator keeps draining its input that way until the input ends, so no
//! element is ever lost.

use crate::drive::drive;
use futures::Stream;
use rop_core::{CancellationToken, Outcome, Pipe, RopError};
use rop_solo::solo;
use std::error::Error;

/// Mass form of [`rop_solo::validate`] over raw values.
///
/// # Example
///
/// ```
/// use futures::StreamExt;
/// use rop_core::{source::from_iter, CancellationToken, RopError};
/// use rop_mass::validate;
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let outcomes: Vec<_> = validate(
///     &token,
///     from_iter(vec![1, 5, 0]),
///     |v| *v < 2,
///     |_| RopError::cancellation("stopped"),
///     "value more than 2",
/// )
/// .collect()
/// .await;
///
/// let accepted: Vec<bool> = outcomes.iter().map(|o| o.is_success()).collect();
/// assert_eq!(accepted, vec![true, false, true]);
/// # }
/// ```
pub fn validate<T, S, P, C>(
    token: &CancellationToken,
    inputs: S,
    mut predicate: P,
    mut cancel: C,
    err_msg: impl Into<String>,
) -> Pipe<Outcome<T>>
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
    C: FnMut(T) -> RopError + Send + 'static,
{
    let err_msg = err_msg.into();
    drive(
        "validate",
        token,
        inputs,
        move |value| solo::validate(value, &mut predicate, err_msg.as_str()),
        move |value| Outcome::cancelled(cancel(value)),
    )
}

/// Mass form of [`rop_solo::validate_with`].
pub fn validate_with<T, S, E, F, C>(
    token: &CancellationToken,
    inputs: S,
    mut check: F,
    mut cancel: C,
) -> Pipe<Outcome<T>>
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
    F: FnMut(&T) -> Result<(), E> + Send + 'static,
    E: Error + Send + Sync + 'static,
    C: FnMut(T) -> RopError + Send + 'static,
{
    drive(
        "validate_with",
        token,
        inputs,
        move |value| solo::validate_with(value, &mut check),
        move |value| Outcome::cancelled(cancel(value)),
    )
}

pub fn and_validate<T, S, P, C>(
    token: &CancellationToken,
    inputs: S,
    mut predicate: P,
    mut cancel: C,
    err_msg: impl Into<String>,
) -> Pipe<Outcome<T>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    let err_msg = err_msg.into();
    drive(
        "and_validate",
        token,
        inputs,
        move |outcome| solo::and_validate(outcome, &mut predicate, err_msg.as_str()),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

pub fn switch<T, U, S, F, C>(
    token: &CancellationToken,
    inputs: S,
    mut f: F,
    mut cancel: C,
) -> Pipe<Outcome<U>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> Outcome<U> + Send + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    drive(
        "switch",
        token,
        inputs,
        move |outcome| solo::switch(outcome, &mut f),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

pub fn map<T, U, S, F, C>(
    token: &CancellationToken,
    inputs: S,
    mut f: F,
    mut cancel: C,
) -> Pipe<Outcome<U>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> U + Send + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    drive(
        "map",
        token,
        inputs,
        move |outcome| solo::map(outcome, &mut f),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

pub fn tee<T, S, F, C>(
    token: &CancellationToken,
    inputs: S,
    mut side_effect: F,
    mut cancel: C,
) -> Pipe<Outcome<T>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    F: FnMut(&T) + Send + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    drive(
        "tee",
        token,
        inputs,
        move |outcome| solo::tee(outcome, &mut side_effect),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

pub fn tee_with<T, S, E, F, C>(
    token: &CancellationToken,
    inputs: S,
    mut side_effect: F,
    mut cancel: C,
) -> Pipe<Outcome<T>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    F: FnMut(&T) -> Result<(), E> + Send + 'static,
    E: Error + Send + Sync + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    drive(
        "tee_with",
        token,
        inputs,
        move |outcome| solo::tee_with(outcome, &mut side_effect),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

/// Mass form of [`rop_solo::double_map`]; failure and cancel handlers only
/// observe, the original error is kept.
pub fn double_map<T, U, S, SF, FF, CF, C>(
    token: &CancellationToken,
    inputs: S,
    mut on_success: SF,
    mut on_failure: FF,
    mut on_cancel: CF,
    mut cancel: C,
) -> Pipe<Outcome<U>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    SF: FnMut(T) -> U + Send + 'static,
    FF: FnMut(&RopError) -> U + Send + 'static,
    CF: FnMut(&RopError) -> U + Send + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    drive(
        "double_map",
        token,
        inputs,
        move |outcome| solo::double_map(outcome, &mut on_success, &mut on_failure, &mut on_cancel),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

/// Mass form of [`rop_solo::try_map`].
pub fn try_map<T, U, S, E, F, C>(
    token: &CancellationToken,
    inputs: S,
    mut f: F,
    mut cancel: C,
) -> Pipe<Outcome<U>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> Result<U, E> + Send + 'static,
    E: Error + Send + Sync + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    drive(
        "try_map",
        token,
        inputs,
        move |outcome| solo::try_map(outcome, &mut f),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

pub fn check<T, S, P, C>(
    token: &CancellationToken,
    inputs: S,
    mut predicate: P,
    mut cancel: C,
    false_err_msg: impl Into<String>,
) -> Pipe<Outcome<bool>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    let false_err_msg = false_err_msg.into();
    drive(
        "check",
        token,
        inputs,
        move |outcome| solo::check(outcome, &mut predicate, false_err_msg.as_str()),
        move |outcome| solo::cancel_with(outcome, &mut cancel),
    )
}

/// Terminal operator: collapses every outcome into a plain value.
///
/// After cancellation `cancel` produces the value for each remaining
/// element directly.
pub fn finally<T, U, S, SF, EF, C>(
    token: &CancellationToken,
    inputs: S,
    mut on_success: SF,
    mut on_fail_or_cancel: EF,
    cancel: C,
) -> Pipe<U>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    SF: FnMut(T) -> U + Send + 'static,
    EF: FnMut(RopError) -> U + Send + 'static,
    C: FnMut(Outcome<T>) -> U + Send + 'static,
{
    drive(
        "finally",
        token,
        inputs,
        move |outcome| solo::finally(outcome, &mut on_success, &mut on_fail_or_cancel),
        cancel,
    )
}
