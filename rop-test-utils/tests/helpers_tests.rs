// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use rop_core::{pipe, spawn, unbounded_pipe};
use rop_test_utils::{
    assert_no_element_emitted, collect_each_within, collect_nested_within, collect_within,
    next_within, test_channel,
};

#[tokio::test]
async fn test_assert_no_element_emitted() {
    let channel = test_channel::<i32>();
    let mut stream = channel.stream.clone();

    assert_no_element_emitted(&mut stream, 100).await;
}

#[tokio::test]
#[should_panic = "Unexpected element emitted, expected no output."]
async fn test_assert_no_element_emitted_panics_on_value() {
    let channel = test_channel();
    let mut stream = channel.stream.clone();
    channel.send(1).unwrap();

    assert_no_element_emitted(&mut stream, 500).await;
}

#[tokio::test]
async fn test_next_within_returns_value_then_end() {
    let channel = test_channel();
    let mut stream = channel.stream.clone();
    channel.send(7).unwrap();
    channel.close();

    assert_eq!(next_within(&mut stream, 500).await, Some(7));
    assert_eq!(next_within(&mut stream, 500).await, None);
}

#[tokio::test]
#[should_panic = "no element within 100ms"]
async fn test_next_within_timeout() {
    let channel = test_channel::<i32>();
    let mut stream = channel.stream.clone();

    next_within(&mut stream, 100).await;
}

#[tokio::test]
async fn test_collect_within_gathers_until_close() {
    let channel = test_channel();
    let stream = channel.stream.clone();
    for value in 0..5 {
        channel.send(value).unwrap();
    }
    channel.close();

    assert_eq!(collect_within(stream, 500).await, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
#[should_panic = "stream did not end within 100ms"]
async fn test_collect_within_timeout_on_open_stream() {
    let channel = test_channel::<i32>();
    let stream = channel.stream.clone();

    collect_within(stream, 100).await;
}

#[test]
fn test_send_after_every_receiver_dropped_returns_value() {
    let channel = test_channel();
    let sender = channel.sender.clone();
    drop(channel);

    let rejected = sender.try_send(3);

    assert!(rejected.is_err());
}

#[tokio::test]
async fn test_collect_each_within_reads_bounded_partitions_side_by_side() {
    let (even_outlet, evens) = pipe();
    let (odd_outlet, odds) = pipe();
    spawn(async move {
        for value in 0..10 {
            let outlet = if value % 2 == 0 { &even_outlet } else { &odd_outlet };
            if outlet.send(value).await.is_err() {
                return;
            }
        }
    });

    let collected = collect_each_within(vec![evens, odds], 500).await;

    assert_eq!(collected, vec![vec![0, 2, 4, 6, 8], vec![1, 3, 5, 7, 9]]);
}

#[tokio::test]
async fn test_collect_nested_within_drains_inner_streams_before_outer_ends() {
    let (outer_outlet, outer) = unbounded_pipe();
    let (first_outlet, first) = pipe();
    let (second_outlet, second) = pipe();
    outer_outlet.try_send(first).unwrap();
    outer_outlet.try_send(second).unwrap();
    spawn(async move {
        for value in 0..3 {
            let _ = first_outlet.send(value).await;
            let _ = second_outlet.send(value * 10).await;
        }
        drop(outer_outlet);
    });

    let collected = collect_nested_within(outer, 500).await;

    assert_eq!(collected, vec![vec![0, 1, 2], vec![0, 10, 20]]);
}

#[tokio::test]
#[should_panic = "streams did not end within 100ms"]
async fn test_collect_each_within_timeout_on_open_stream() {
    let channel = test_channel::<i32>();

    collect_each_within(vec![channel.stream.clone()], 100).await;
}
