// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rop_core::{pipe, pipe_with_capacity, spawn, CancellationToken, Outlet, Pipe, WaitGroup};
use std::sync::Arc;

/// Spread `input` over `count` partitions in round-robin order.
///
/// Partition `i` receives input positions `i`, `i + count`, `i + 2 * count`,
/// and so on, in order. The workers share one cursor naming the partition due
/// next; only the worker holding it reads from `input`.
///
/// Cancellation is checked by whoever claims the cursor. A value already
/// taken from `input` is still delivered, the rest of the input is left
/// unread. The cursor is closed when the input ends, when the token fires or
/// when a partition consumer goes away; the partitions close after every
/// worker has stopped.
///
/// Partitions are bounded and filled in turn, so they have to be read
/// concurrently: a consumer that reads one partition to its end before
/// touching the next blocks the worker on a full partition and never sees
/// the first one close.
///
/// `count == 0` returns no partitions and does not touch `input`.
///
/// # Example
///
/// ```
/// use futures::{future::join_all, StreamExt};
/// use rop_core::{source::from_iter, CancellationToken};
/// use rop_fan::out_next;
///
/// # #[tokio::main]
/// # async fn main() {
/// let token = CancellationToken::new();
/// let partitions = out_next(&token, &from_iter(vec![1, 3, 4, 2, 5]), 4);
///
/// let collected: Vec<Vec<i32>> =
///     join_all(partitions.into_iter().map(|p| p.collect::<Vec<_>>())).await;
///
/// assert_eq!(collected, vec![vec![1, 5], vec![3], vec![4], vec![2]]);
/// # }
/// ```
pub fn out_next<T>(token: &CancellationToken, input: &Pipe<T>, count: usize) -> Vec<Pipe<T>>
where
    T: Send + 'static,
{
    if count == 0 {
        return Vec::new();
    }

    let (outlets, partitions) = partitions(count);
    let outlets = Arc::new(outlets);
    let (cursor_outlet, cursor) = pipe_with_capacity::<usize>(1);
    let workers = WaitGroup::new();

    for worker in 0..count {
        let guard = workers.guard();
        let token = token.clone();
        let input = input.clone();
        let outlets = Arc::clone(&outlets);
        let cursor_outlet = cursor_outlet.clone();
        let cursor = cursor.clone();

        spawn(async move {
            let _guard = guard;

            if worker == 0 && cursor_outlet.send(0).await.is_err() {
                return;
            }

            while let Some(next) = cursor.recv().await {
                if token.is_cancelled() {
                    rop_core::debug!("out_next: worker {worker} observed cancellation");
                    cursor.close();
                    return;
                }

                let Some(value) = input.recv().await else {
                    rop_core::debug!("out_next: input ended");
                    cursor.close();
                    return;
                };

                if outlets[next].send(value).await.is_err() {
                    rop_core::warn!("out_next: partition {next} dropped, stopping");
                    cursor.close();
                    return;
                }

                if cursor_outlet.send((next + 1) % count).await.is_err() {
                    return;
                }
            }
        });
    }

    close_after(workers, outlets);
    partitions
}

/// Spread `input` over `count` partitions, each value going to whichever
/// partition worker takes it first.
///
/// No ordering or fairness holds between partitions. Each worker checks the
/// token before every read and stops once it is cancelled, leaving the rest
/// of the input unread.
///
/// As with [`out_next`], read the partitions concurrently.
///
/// `count == 0` returns no partitions and does not touch `input`.
pub fn out_rand<T>(token: &CancellationToken, input: &Pipe<T>, count: usize) -> Vec<Pipe<T>>
where
    T: Send + 'static,
{
    if count == 0 {
        return Vec::new();
    }

    let (outlets, partitions) = partitions(count);
    let workers = WaitGroup::new();

    for (worker, outlet) in outlets.iter().enumerate() {
        let guard = workers.guard();
        let token = token.clone();
        let input = input.clone();
        let outlet = outlet.clone();

        spawn(async move {
            let _guard = guard;
            loop {
                if token.is_cancelled() {
                    rop_core::debug!("out_rand: worker {worker} observed cancellation");
                    return;
                }
                let Some(value) = input.recv().await else {
                    return;
                };
                if outlet.send(value).await.is_err() {
                    rop_core::warn!("out_rand: partition {worker} dropped, stopping");
                    return;
                }
            }
        });
    }

    close_after(workers, Arc::new(outlets));
    partitions
}

fn partitions<T>(count: usize) -> (Vec<Outlet<T>>, Vec<Pipe<T>>) {
    (0..count).map(|_| pipe()).unzip()
}

fn close_after<T>(workers: WaitGroup, outlets: Arc<Vec<Outlet<T>>>)
where
    T: Send + 'static,
{
    spawn(async move {
        workers.wait().await;
        for outlet in outlets.iter() {
            outlet.close();
        }
        rop_core::debug!("fan out: {} partitions closed", outlets.len());
    });
}
