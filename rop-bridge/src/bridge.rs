// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use rop_core::{
    pipe, pipe_with_capacity, spawn, unbounded_pipe, CancellationToken, Outlet, Pipe, WaitGroup,
    WaitGuard,
};

/// Limits applied by the bridge supervisor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BridgeOptions {
    /// Upper bound on inner pipelines running at the same time. `None` starts
    /// one pipeline per inner stream as soon as it is discovered, with no
    /// bound.
    pub max_inner_pipelines: Option<usize>,
}

impl BridgeOptions {
    /// At most `max` inner pipelines at once (at least one).
    pub const fn capped(max: usize) -> Self {
        Self {
            max_inner_pipelines: Some(if max == 0 { 1 } else { max }),
        }
    }
}

/// Start `stage` on every inner stream of `inputs`; each pipeline gets its own
/// output pipe, published on the returned outer pipe in discovery order.
///
/// The outer pipe closes only after every inner output has been drained, so
/// read each inner pipe as it is published. Collecting the outer pipe to its
/// end before touching any inner one never finishes.
///
/// # Example
///
/// ```
/// use futures::StreamExt;
/// use rop_core::{source::from_iter, CancellationToken, RopError};
/// use rop_bridge::{bridge_paired, BridgeOptions};
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let inputs = from_iter(vec![from_iter(vec![1, 2]), from_iter(vec![3])]);
///
/// let stage_token = token.clone();
/// let mut outputs = bridge_paired(&token, inputs, BridgeOptions::default(), move |inner| {
///     let cancel = |_: i32| RopError::cancellation("stopped");
///     rop_mass::validate(&stage_token, inner, |v| *v < 3, cancel, "too big")
/// });
///
/// let first: Vec<bool> = outputs.next().await.unwrap().map(|o| o.is_success()).collect().await;
/// let second: Vec<bool> = outputs.next().await.unwrap().map(|o| o.is_success()).collect().await;
///
/// assert_eq!(first, vec![true, true]);
/// assert_eq!(second, vec![false]);
/// # }
/// ```
pub fn bridge_paired<S, I, P, O, F>(
    token: &CancellationToken,
    inputs: S,
    options: BridgeOptions,
    stage: F,
) -> Pipe<Pipe<O>>
where
    S: Stream<Item = I> + Send + 'static,
    I: Send + 'static,
    P: Stream<Item = O> + Send + 'static,
    O: Send + 'static,
    F: FnMut(I) -> P + Send + 'static,
{
    let (outer_outlet, outer) = unbounded_pipe();
    let closer = outer_outlet.clone();

    supervise("bridge_paired", token, inputs, options, stage, closer, move || {
        let (outlet, output) = pipe();
        let published = outer_outlet.try_send(output).is_ok();
        published.then_some(outlet)
    });

    outer
}

/// Like [`bridge_paired`], but every pipeline writes into one shared output.
/// Values of one pipeline keep their order, pipelines interleave freely.
pub fn bridge_shared<S, I, P, O, F>(
    token: &CancellationToken,
    inputs: S,
    options: BridgeOptions,
    stage: F,
) -> Pipe<O>
where
    S: Stream<Item = I> + Send + 'static,
    I: Send + 'static,
    P: Stream<Item = O> + Send + 'static,
    O: Send + 'static,
    F: FnMut(I) -> P + Send + 'static,
{
    let (outlet, output) = pipe();
    let closer = outlet.clone();

    supervise("bridge_shared", token, inputs, options, stage, closer, move || {
        Some(outlet.clone())
    });

    output
}

/// Runs the supervisor and the closer. `next_outlet` hands out the outlet the
/// next pipeline writes to, `None` once nobody listens anymore. `closer` is
/// closed after every participant has finished.
fn supervise<S, I, P, O, F, N, C>(
    stage_name: &'static str,
    token: &CancellationToken,
    inputs: S,
    options: BridgeOptions,
    mut stage: F,
    closer: Outlet<C>,
    mut next_outlet: N,
) where
    S: Stream<Item = I> + Send + 'static,
    I: Send + 'static,
    P: Stream<Item = O> + Send + 'static,
    O: Send + 'static,
    F: FnMut(I) -> P + Send + 'static,
    N: FnMut() -> Option<Outlet<O>> + Send + 'static,
    C: Send + 'static,
{
    let token = token.clone();
    let members = WaitGroup::new();
    let supervisor = members.guard();
    let slots = options.max_inner_pipelines.map(Slots::new);

    let group = members.clone();
    spawn(async move {
        let _supervisor = supervisor;
        let mut inputs = Box::pin(inputs);
        let mut started = 0_usize;

        while let Some(input) = inputs.next().await {
            if token.is_cancelled() {
                rop_core::debug!("{stage_name}: cancellation observed after {started} pipelines");
                return;
            }

            let slot = match &slots {
                Some(slots) => match slots.acquire().await {
                    Some(slot) => Some(slot),
                    None => return,
                },
                None => None,
            };

            let Some(outlet) = next_outlet() else {
                rop_core::warn!("{stage_name}: consumer dropped the output, stopping");
                return;
            };

            spawn(forward_all(stage_name, group.guard(), slot, stage(input), outlet));
            started += 1;
        }
        rop_core::debug!("{stage_name}: input ended after {started} pipelines");
    });

    spawn(async move {
        members.wait().await;
        closer.close();
        rop_core::debug!("{stage_name}: every pipeline finished, output closed");
    });
}

async fn forward_all<P, O>(
    stage_name: &'static str,
    _member: WaitGuard,
    _slot: Option<Slot>,
    pipeline: P,
    outlet: Outlet<O>,
) where
    P: Stream<Item = O>,
{
    let mut pipeline = Box::pin(pipeline);
    while let Some(value) = pipeline.next().await {
        if outlet.send(value).await.is_err() {
            rop_core::warn!("{stage_name}: pipeline output dropped, stopping");
            return;
        }
    }
}

/// Counting limit on running pipelines: a slot is a buffered unit in a
/// channel of capacity `max`.
struct Slots {
    taken: Outlet<()>,
    freed: Pipe<()>,
}

struct Slot {
    freed: Pipe<()>,
}

impl Slots {
    fn new(max: usize) -> Self {
        let (taken, freed) = pipe_with_capacity(max);
        Self { taken, freed }
    }

    async fn acquire(&self) -> Option<Slot> {
        self.taken.send(()).await.ok()?;
        Some(Slot {
            freed: self.freed.clone(),
        })
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.freed.try_recv();
    }
}
