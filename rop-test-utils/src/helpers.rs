// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::join_all;
use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Panics if `stream` yields anything (or ends) within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Next element of `stream`, `None` if it ended.
///
/// Panics if nothing arrives within `timeout_ms`.
pub async fn next_within<S>(stream: &mut S, timeout_ms: u64) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    timeout(Duration::from_millis(timeout_ms), stream.next())
        .await
        .unwrap_or_else(|_| panic!("no element within {timeout_ms}ms"))
}

/// Every element of `stream` until it ends.
///
/// Panics if the stream is still open after `timeout_ms`.
pub async fn collect_within<S>(stream: S, timeout_ms: u64) -> Vec<S::Item>
where
    S: Stream,
{
    timeout(Duration::from_millis(timeout_ms), stream.collect::<Vec<_>>())
        .await
        .unwrap_or_else(|_| panic!("stream did not end within {timeout_ms}ms"))
}

/// Every element of each stream, collected concurrently.
///
/// Bounded partitions fed by one producer have to be read side by side: the
/// producer blocks on a full partition while the test waits on another one.
///
/// Panics if any stream is still open after `timeout_ms`.
pub async fn collect_each_within<S>(streams: Vec<S>, timeout_ms: u64) -> Vec<Vec<S::Item>>
where
    S: Stream,
{
    let collecting = join_all(streams.into_iter().map(|s| s.collect::<Vec<_>>()));
    timeout(Duration::from_millis(timeout_ms), collecting)
        .await
        .unwrap_or_else(|_| panic!("streams did not end within {timeout_ms}ms"))
}

/// Every element of every inner stream of `outer`, one `Vec` per inner stream
/// in the order they were published.
///
/// Inner streams are drained as soon as they show up, while `outer` is still
/// being read.
///
/// Panics if `outer` or an inner stream is still open after `timeout_ms`.
pub async fn collect_nested_within<S>(
    outer: S,
    timeout_ms: u64,
) -> Vec<Vec<<S::Item as Stream>::Item>>
where
    S: Stream,
    S::Item: Stream,
{
    let collecting = outer
        .map(|inner| inner.collect::<Vec<_>>())
        .buffered(usize::MAX)
        .collect::<Vec<_>>();
    timeout(Duration::from_millis(timeout_ms), collecting)
        .await
        .unwrap_or_else(|_| panic!("nested streams did not end within {timeout_ms}ms"))
}
