// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::drive::{drain, forward};
use futures::{Stream, StreamExt};
use rop_core::{pipe, spawn, CancellationToken, Outcome, Pipe, RopError};
use rop_solo::{solo, try_with_retry_async, RetryStrategy};
use std::error::Error;

/// Mass form of [`rop_solo::try_with_retry_async`].
///
/// Retries of one element complete before the next element is taken, so
/// order is kept. The token is polled between elements, not between
/// attempts.
pub fn try_with_retry<T, U, S, R, E, F, C>(
    token: &CancellationToken,
    inputs: S,
    strategy: R,
    mut f: F,
    mut cancel: C,
) -> Pipe<Outcome<U>>
where
    S: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
    R: RetryStrategy + 'static,
    F: FnMut(&T) -> Result<U, E> + Send + 'static,
    E: Error + Send + Sync + 'static,
    C: FnMut(Outcome<T>) -> RopError + Send + 'static,
{
    const STAGE: &str = "try_with_retry";

    let (outlet, output) = pipe();
    let token = token.clone();

    spawn(async move {
        let mut inputs = Box::pin(inputs);
        let mut cancel =
            move |outcome: Outcome<T>| -> Outcome<U> { solo::cancel_with(outcome, &mut cancel) };

        while let Some(outcome) = inputs.next().await {
            if token.is_cancelled() {
                rop_core::debug!("{STAGE}: cancellation observed, draining input");
                if forward(STAGE, &outlet, cancel(outcome)).await {
                    let drained = drain(STAGE, &mut inputs, &outlet, &mut cancel).await;
                    rop_core::debug!("{STAGE}: cancelled {drained} remaining elements");
                }
                return;
            }

            let result = try_with_retry_async(outcome, &strategy, &mut f).await;
            if !forward(STAGE, &outlet, result).await {
                return;
            }
        }
    });

    output
}
