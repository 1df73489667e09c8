// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One mass operator per inner stream, paired outputs.
//!
//! Each function is [`bridge_paired`] around the mass operator of the same
//! name, with [`BridgeOptions::default`]. User functions are shared between
//! the inner pipelines, hence the `Fn + Sync` bounds. Use
//! [`bridge_paired`] or [`bridge_shared`](crate::bridge_shared) directly for a
//! cap on running pipelines or for a shared output.

use crate::bridge::{bridge_paired, BridgeOptions};
use futures::Stream;
use rop_core::{CancellationToken, Outcome, Pipe, RopError};
use std::error::Error;
use std::sync::Arc;

pub fn validate<S, I, T, P, C>(
    token: &CancellationToken,
    inputs: S,
    predicate: P,
    cancel: C,
    err_msg: impl Into<String>,
) -> Pipe<Pipe<Outcome<T>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    C: Fn(T) -> RopError + Send + Sync + 'static,
{
    let predicate = Arc::new(predicate);
    let cancel = Arc::new(cancel);
    let err_msg: String = err_msg.into();
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let predicate = Arc::clone(&predicate);
        let cancel = Arc::clone(&cancel);
        rop_mass::validate(
            &stage_token,
            inner,
            move |value| predicate(value),
            move |value| cancel(value),
            err_msg.clone(),
        )
    })
}

pub fn and_validate<S, I, T, P, C>(
    token: &CancellationToken,
    inputs: S,
    predicate: P,
    cancel: C,
    err_msg: impl Into<String>,
) -> Pipe<Pipe<Outcome<T>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> RopError + Send + Sync + 'static,
{
    let predicate = Arc::new(predicate);
    let cancel = Arc::new(cancel);
    let err_msg: String = err_msg.into();
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let predicate = Arc::clone(&predicate);
        let cancel = Arc::clone(&cancel);
        rop_mass::and_validate(
            &stage_token,
            inner,
            move |value| predicate(value),
            move |outcome| cancel(outcome),
            err_msg.clone(),
        )
    })
}

pub fn switch<S, I, T, U, F, C>(
    token: &CancellationToken,
    inputs: S,
    f: F,
    cancel: C,
) -> Pipe<Pipe<Outcome<U>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> Outcome<U> + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> RopError + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let cancel = Arc::new(cancel);
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let f = Arc::clone(&f);
        let cancel = Arc::clone(&cancel);
        rop_mass::switch(&stage_token, inner, move |value| f(value), move |outcome| cancel(outcome))
    })
}

pub fn map<S, I, T, U, F, C>(
    token: &CancellationToken,
    inputs: S,
    f: F,
    cancel: C,
) -> Pipe<Pipe<Outcome<U>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> RopError + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let cancel = Arc::new(cancel);
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let f = Arc::clone(&f);
        let cancel = Arc::clone(&cancel);
        rop_mass::map(&stage_token, inner, move |value| f(value), move |outcome| cancel(outcome))
    })
}

pub fn tee<S, I, T, F, C>(
    token: &CancellationToken,
    inputs: S,
    side_effect: F,
    cancel: C,
) -> Pipe<Pipe<Outcome<T>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    F: Fn(&T) + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> RopError + Send + Sync + 'static,
{
    let side_effect = Arc::new(side_effect);
    let cancel = Arc::new(cancel);
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let side_effect = Arc::clone(&side_effect);
        let cancel = Arc::clone(&cancel);
        rop_mass::tee(
            &stage_token,
            inner,
            move |value| side_effect(value),
            move |outcome| cancel(outcome),
        )
    })
}

/// Failure and cancel handlers only observe; errors pass through unchanged.
pub fn double_map<S, I, T, U, SF, FF, CF, C>(
    token: &CancellationToken,
    inputs: S,
    on_success: SF,
    on_failure: FF,
    on_cancel: CF,
    cancel: C,
) -> Pipe<Pipe<Outcome<U>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    SF: Fn(T) -> U + Send + Sync + 'static,
    FF: Fn(&RopError) -> U + Send + Sync + 'static,
    CF: Fn(&RopError) -> U + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> RopError + Send + Sync + 'static,
{
    let on_success = Arc::new(on_success);
    let on_failure = Arc::new(on_failure);
    let on_cancel = Arc::new(on_cancel);
    let cancel = Arc::new(cancel);
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let on_success = Arc::clone(&on_success);
        let on_failure = Arc::clone(&on_failure);
        let on_cancel = Arc::clone(&on_cancel);
        let cancel = Arc::clone(&cancel);
        rop_mass::double_map(
            &stage_token,
            inner,
            move |value| on_success(value),
            move |error| on_failure(error),
            move |error| on_cancel(error),
            move |outcome| cancel(outcome),
        )
    })
}

pub fn try_map<S, I, T, U, E, F, C>(
    token: &CancellationToken,
    inputs: S,
    f: F,
    cancel: C,
) -> Pipe<Pipe<Outcome<U>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    E: Error + Send + Sync + 'static,
    F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> RopError + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let cancel = Arc::new(cancel);
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let f = Arc::clone(&f);
        let cancel = Arc::clone(&cancel);
        rop_mass::try_map(
            &stage_token,
            inner,
            move |value| f(value),
            move |outcome| cancel(outcome),
        )
    })
}

pub fn check<S, I, T, P, C>(
    token: &CancellationToken,
    inputs: S,
    predicate: P,
    cancel: C,
    false_err_msg: impl Into<String>,
) -> Pipe<Pipe<Outcome<bool>>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> RopError + Send + Sync + 'static,
{
    let predicate = Arc::new(predicate);
    let cancel = Arc::new(cancel);
    let false_err_msg: String = false_err_msg.into();
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let predicate = Arc::clone(&predicate);
        let cancel = Arc::clone(&cancel);
        rop_mass::check(
            &stage_token,
            inner,
            move |value| predicate(value),
            move |outcome| cancel(outcome),
            false_err_msg.clone(),
        )
    })
}

/// Terminal stage: every inner pipeline ends in plain values.
pub fn finally<S, I, T, U, SF, EF, C>(
    token: &CancellationToken,
    inputs: S,
    on_success: SF,
    on_fail_or_cancel: EF,
    cancel: C,
) -> Pipe<Pipe<U>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    SF: Fn(T) -> U + Send + Sync + 'static,
    EF: Fn(RopError) -> U + Send + Sync + 'static,
    C: Fn(Outcome<T>) -> U + Send + Sync + 'static,
{
    let on_success = Arc::new(on_success);
    let on_fail_or_cancel = Arc::new(on_fail_or_cancel);
    let cancel = Arc::new(cancel);
    let stage_token = token.clone();

    bridge_paired(token, inputs, BridgeOptions::default(), move |inner| {
        let on_success = Arc::clone(&on_success);
        let on_fail_or_cancel = Arc::clone(&on_fail_or_cancel);
        let cancel = Arc::clone(&cancel);
        rop_mass::finally(
            &stage_token,
            inner,
            move |value| on_success(value),
            move |error| on_fail_or_cancel(error),
            move |outcome| cancel(outcome),
        )
    })
}
