// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, Stream, StreamExt};
use rop_core::{pipe, spawn, CancellationToken, Outcome, Outlet, Pipe, WaitGroup, WaitGuard};

/// Merge every outcome stream published on `inputs` into one pipe.
///
/// One reader task is started per discovered input. Values of a single input
/// keep their relative order, inputs interleave freely. Once the token is
/// cancelled readers stop forwarding; the output closes when the last reader
/// and the discovery task are done.
///
/// # Example
///
/// ```
/// use rop_core::{source::from_iter, CancellationToken, Outcome};
/// use rop_fan::{in_tee, pipes_of};
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let inputs = pipes_of(vec![
///     from_iter(vec![Outcome::success(1), Outcome::success(2)]),
///     from_iter(vec![Outcome::success(3)]),
/// ]);
///
/// let mut merged: Vec<i32> = in_tee(&token, inputs)
///     .filter_map(|o| async move { o.into_value() })
///     .collect()
///     .await;
/// merged.sort_unstable();
///
/// assert_eq!(merged, vec![1, 2, 3]);
/// # }
/// ```
pub fn in_tee<S, I, T>(token: &CancellationToken, inputs: S) -> Pipe<Outcome<T>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = Outcome<T>> + Send + 'static,
    T: Send + 'static,
{
    merge("in_tee", Some(token.clone()), inputs)
}

/// [`in_tee`] for streams of plain values, typically the outputs of
/// `finally` stages.
pub fn in_finally<S, I, T>(token: &CancellationToken, inputs: S) -> Pipe<T>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    merge("in_finally", Some(token.clone()), inputs)
}

/// Merge a fixed set of streams. Runs until every input ends.
pub fn aggregate<S, T>(inputs: Vec<S>) -> Pipe<T>
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    merge("aggregate", None, stream::iter(inputs))
}

fn merge<S, I, T>(stage: &'static str, token: Option<CancellationToken>, inputs: S) -> Pipe<T>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    let (outlet, output) = pipe();
    let readers = WaitGroup::new();
    let discovery = readers.guard();
    let closer = outlet.clone();

    let group = readers.clone();
    spawn(async move {
        let _discovery = discovery;
        let mut inputs = Box::pin(inputs);
        let mut discovered = 0_usize;

        while let Some(input) = inputs.next().await {
            spawn(read_into(stage, group.guard(), token.clone(), input, outlet.clone()));
            discovered += 1;
        }
        rop_core::debug!("{stage}: {discovered} inputs discovered");
    });

    spawn(async move {
        readers.wait().await;
        closer.close();
        rop_core::debug!("{stage}: all readers done, output closed");
    });

    output
}

async fn read_into<I, T>(
    stage: &'static str,
    _reader: WaitGuard,
    token: Option<CancellationToken>,
    input: I,
    outlet: Outlet<T>,
) where
    I: Stream<Item = T>,
{
    let mut input = Box::pin(input);
    while let Some(value) = input.next().await {
        if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
            rop_core::debug!("{stage}: cancellation observed, reader stops");
            return;
        }
        if outlet.send(value).await.is_err() {
            rop_core::warn!("{stage}: consumer dropped the output, reader stops");
            return;
        }
    }
}
