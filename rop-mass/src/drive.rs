// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The task behind every mass operator.

use futures::{Stream, StreamExt};
use rop_core::{pipe, spawn, CancellationToken, Outlet, Pipe};

/// Spawn the task that applies `op` to every element of `inputs`.
///
/// Right before each element the token is polled. Once it is cancelled the
/// current element and every element still to come go through `cancel`
/// instead, until the input ends. The output closes when the task returns.
pub(crate) fn drive<S, Out, Op, Cancel>(
    stage: &'static str,
    token: &CancellationToken,
    inputs: S,
    mut op: Op,
    mut cancel: Cancel,
) -> Pipe<Out>
where
    S: Stream + Send + 'static,
    S::Item: Send,
    Out: Send + 'static,
    Op: FnMut(S::Item) -> Out + Send + 'static,
    Cancel: FnMut(S::Item) -> Out + Send + 'static,
{
    let (outlet, output) = pipe();
    let token = token.clone();

    spawn(async move {
        let mut inputs = Box::pin(inputs);

        while let Some(item) = inputs.next().await {
            if token.is_cancelled() {
                rop_core::debug!("{stage}: cancellation observed, draining input");
                if !forward(stage, &outlet, cancel(item)).await {
                    return;
                }
                let drained = drain(stage, &mut inputs, &outlet, &mut cancel).await;
                rop_core::debug!("{stage}: cancelled {drained} remaining elements");
                return;
            }

            if !forward(stage, &outlet, op(item)).await {
                return;
            }
        }
    });

    output
}

/// Send every remaining element through `cancel`. Returns how many were sent.
pub(crate) async fn drain<S, Out, Cancel>(
    stage: &'static str,
    inputs: &mut S,
    outlet: &Outlet<Out>,
    cancel: &mut Cancel,
) -> usize
where
    S: Stream + Unpin,
    Cancel: FnMut(S::Item) -> Out,
{
    let mut drained = 0;
    while let Some(item) = inputs.next().await {
        if !forward(stage, outlet, cancel(item)).await {
            break;
        }
        drained += 1;
    }
    drained
}

/// Returns `false` when the consumer dropped the output.
pub(crate) async fn forward<Out>(stage: &'static str, outlet: &Outlet<Out>, value: Out) -> bool {
    if outlet.send(value).await.is_err() {
        rop_core::warn!("{stage}: consumer dropped the output, stopping");
        return false;
    }
    true
}
