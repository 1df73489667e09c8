// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::operators;
use futures::Stream;
use rop_core::{CancellationToken, Outcome, Pipe, RopError};
use rop_solo::RetryStrategy;
use std::error::Error;

/// Chaining form of the mass operators that start from raw values.
pub trait MassSourceExt<T>: Stream<Item = T> + Send + Sized + 'static
where
    T: Send + 'static,
{
    /// See [`operators::validate`].
    fn mass_validate<P, C>(
        self,
        token: &CancellationToken,
        predicate: P,
        cancel: C,
        err_msg: impl Into<String>,
    ) -> Pipe<Outcome<T>>
    where
        P: FnMut(&T) -> bool + Send + 'static,
        C: FnMut(T) -> RopError + Send + 'static,
    {
        operators::validate(token, self, predicate, cancel, err_msg)
    }

    /// See [`operators::validate_with`].
    fn mass_validate_with<E, F, C>(
        self,
        token: &CancellationToken,
        check: F,
        cancel: C,
    ) -> Pipe<Outcome<T>>
    where
        F: FnMut(&T) -> Result<(), E> + Send + 'static,
        E: Error + Send + Sync + 'static,
        C: FnMut(T) -> RopError + Send + 'static,
    {
        operators::validate_with(token, self, check, cancel)
    }
}

impl<S, T> MassSourceExt<T> for S
where
    S: Stream<Item = T> + Send + Sized + 'static,
    T: Send + 'static,
{
}

/// Chaining form of the mass operators over outcome streams.
///
/// # Example
///
/// ```
/// use futures::StreamExt;
/// use rop_core::{source::from_iter, CancellationToken, RopError};
/// use rop_mass::{MassExt, MassSourceExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let results: Vec<String> = from_iter(vec![1, 3])
///     .mass_validate(
///         &token,
///         |v| *v < 2,
///         |_| RopError::cancellation("stopped"),
///         "value more than 2",
///     )
///     .mass_map(&token, |v| v * 100, |_| RopError::cancellation("stopped"))
///     .mass_finally(
///         &token,
///         |v| format!("ok {v}"),
///         |e| format!("error: {e}"),
///         |_| "stopped".to_string(),
///     )
///     .collect()
///     .await;
///
/// assert_eq!(results, vec!["ok 100", "error: value more than 2"]);
/// # }
/// ```
pub trait MassExt<T>: Stream<Item = Outcome<T>> + Send + Sized + 'static
where
    T: Send + 'static,
{
    fn mass_and_validate<P, C>(
        self,
        token: &CancellationToken,
        predicate: P,
        cancel: C,
        err_msg: impl Into<String>,
    ) -> Pipe<Outcome<T>>
    where
        P: FnMut(&T) -> bool + Send + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::and_validate(token, self, predicate, cancel, err_msg)
    }

    fn mass_switch<U, F, C>(self, token: &CancellationToken, f: F, cancel: C) -> Pipe<Outcome<U>>
    where
        U: Send + 'static,
        F: FnMut(T) -> Outcome<U> + Send + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::switch(token, self, f, cancel)
    }

    fn mass_map<U, F, C>(self, token: &CancellationToken, f: F, cancel: C) -> Pipe<Outcome<U>>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::map(token, self, f, cancel)
    }

    fn mass_tee<F, C>(
        self,
        token: &CancellationToken,
        side_effect: F,
        cancel: C,
    ) -> Pipe<Outcome<T>>
    where
        F: FnMut(&T) + Send + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::tee(token, self, side_effect, cancel)
    }

    fn mass_tee_with<E, F, C>(
        self,
        token: &CancellationToken,
        side_effect: F,
        cancel: C,
    ) -> Pipe<Outcome<T>>
    where
        F: FnMut(&T) -> Result<(), E> + Send + 'static,
        E: Error + Send + Sync + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::tee_with(token, self, side_effect, cancel)
    }

    fn mass_double_map<U, SF, FF, CF, C>(
        self,
        token: &CancellationToken,
        on_success: SF,
        on_failure: FF,
        on_cancel: CF,
        cancel: C,
    ) -> Pipe<Outcome<U>>
    where
        U: Send + 'static,
        SF: FnMut(T) -> U + Send + 'static,
        FF: FnMut(&RopError) -> U + Send + 'static,
        CF: FnMut(&RopError) -> U + Send + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::double_map(token, self, on_success, on_failure, on_cancel, cancel)
    }

    fn mass_try_map<U, E, F, C>(
        self,
        token: &CancellationToken,
        f: F,
        cancel: C,
    ) -> Pipe<Outcome<U>>
    where
        U: Send + 'static,
        F: FnMut(T) -> Result<U, E> + Send + 'static,
        E: Error + Send + Sync + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::try_map(token, self, f, cancel)
    }

    fn mass_try_with_retry<U, R, E, F, C>(
        self,
        token: &CancellationToken,
        strategy: R,
        f: F,
        cancel: C,
    ) -> Pipe<Outcome<U>>
    where
        U: Send + 'static,
        R: RetryStrategy + 'static,
        F: FnMut(&T) -> Result<U, E> + Send + 'static,
        E: Error + Send + Sync + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        crate::retry::try_with_retry(token, self, strategy, f, cancel)
    }

    fn mass_check<P, C>(
        self,
        token: &CancellationToken,
        predicate: P,
        cancel: C,
        false_err_msg: impl Into<String>,
    ) -> Pipe<Outcome<bool>>
    where
        P: FnMut(&T) -> bool + Send + 'static,
        C: FnMut(Outcome<T>) -> RopError + Send + 'static,
    {
        operators::check(token, self, predicate, cancel, false_err_msg)
    }

    fn mass_finally<U, SF, EF, C>(
        self,
        token: &CancellationToken,
        on_success: SF,
        on_fail_or_cancel: EF,
        cancel: C,
    ) -> Pipe<U>
    where
        U: Send + 'static,
        SF: FnMut(T) -> U + Send + 'static,
        EF: FnMut(RopError) -> U + Send + 'static,
        C: FnMut(Outcome<T>) -> U + Send + 'static,
    {
        operators::finally(token, self, on_success, on_fail_or_cancel, cancel)
    }
}

impl<S, T> MassExt<T> for S
where
    S: Stream<Item = Outcome<T>> + Send + Sized + 'static,
    T: Send + 'static,
{
}
