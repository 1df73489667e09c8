// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pipes fed from in-memory collections.

use crate::{pipe, sleep, spawn, CancellationToken, Pipe};
use futures::future::{self, Either};
use std::pin::pin;
use std::time::Duration;

/// Feed the items of `iter` into a fresh pipe from a spawned producer.
///
/// The pipe closes after the last item, or early if the consumer drops it.
///
/// # Example
///
/// ```
/// use futures::StreamExt;
/// use rop_core::source::from_iter;
///
/// # #[tokio::main]
/// # async fn main() {
/// let values: Vec<i32> = from_iter(vec![1, 2, 3]).collect().await;
/// assert_eq!(values, vec![1, 2, 3]);
/// # }
/// ```
pub fn from_iter<I>(iter: I) -> Pipe<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    let (outlet, output) = pipe();
    let iter = iter.into_iter();

    spawn(async move {
        for item in iter {
            if outlet.send(item).await.is_err() {
                crate::warn!("source: consumer dropped the pipe");
                return;
            }
        }
    });

    output
}

/// Like [`from_iter`], but cancels `token` right before sending the first item
/// for which `cancel_when(index, &item)` holds.
///
/// Items already sent but not yet taken by the consumer may observe the
/// cancellation as well; feed the pipeline by hand and step the consumer when
/// the exact position matters.
pub fn from_iter_cancel_when<I, F>(
    token: &CancellationToken,
    iter: I,
    mut cancel_when: F,
) -> Pipe<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
    F: FnMut(usize, &I::Item) -> bool + Send + 'static,
{
    let (outlet, output) = pipe();
    let iter = iter.into_iter();
    let token = token.clone();

    spawn(async move {
        for (index, item) in iter.enumerate() {
            if !token.is_cancelled() && cancel_when(index, &item) {
                crate::debug!("source: cancelling at index {index}");
                token.cancel();
            }
            if outlet.send(item).await.is_err() {
                crate::warn!("source: consumer dropped the pipe");
                return;
            }
        }
    });

    output
}

/// Like [`from_iter`], but cancels `token` once `timeout` has elapsed.
///
/// The producer keeps sending every item; stages downstream observe the
/// cancellation and drain the rest. The timer stops early if the token is
/// cancelled by someone else first.
pub fn from_iter_cancel_after<I>(
    token: &CancellationToken,
    iter: I,
    timeout: Duration,
) -> Pipe<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    let token = token.clone();

    spawn(async move {
        let expired = pin!(sleep(timeout));
        let cancelled = pin!(token.cancelled());
        if let Either::Left(((), _)) = future::select(expired, cancelled).await {
            crate::debug!("source: timeout of {timeout:?} elapsed, cancelling");
            token.cancel();
        }
    });

    from_iter(iter)
}
