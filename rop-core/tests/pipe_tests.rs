// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::{FutureExt, StreamExt};
use rop_core::{pipe, pipe_with_capacity, unbounded_pipe, PIPE_CAPACITY};

#[tokio::test]
async fn test_pipe_preserves_order_and_ends_on_drop() {
    // Arrange
    let (outlet, output) = pipe();
    tokio::spawn(async move {
        for i in 0..5 {
            outlet.send(i).await.expect("consumer alive");
        }
    });

    // Act
    let received: Vec<i32> = output.collect().await;

    // Assert
    assert_eq!(received, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_default_capacity_holds_one_element() {
    let (outlet, output) = pipe::<u8>();

    assert_eq!(PIPE_CAPACITY, 1);
    assert!(outlet.try_send(1).is_ok());
    assert!(outlet.try_send(2).is_err());
    assert_eq!(output.len(), 1);
}

#[test]
fn test_zero_capacity_is_clamped_to_one() {
    let (outlet, _output) = pipe_with_capacity::<u8>(0);
    assert!(outlet.try_send(1).is_ok());
}

#[test]
fn test_unbounded_pipe_never_blocks() {
    let (outlet, output) = unbounded_pipe();
    for i in 0..100 {
        assert!(outlet.try_send(i).is_ok());
    }
    assert_eq!(output.len(), 100);
}

#[test]
fn test_clones_share_elements() {
    let (outlet, first) = unbounded_pipe();
    let second = first.clone();
    outlet.try_send(1).expect("open");
    outlet.try_send(2).expect("open");

    assert_eq!(first.try_recv(), Some(1));
    assert_eq!(second.try_recv(), Some(2));
    assert!(first.is_empty());
}

#[test]
fn test_close_is_reported_once() {
    let (outlet, output) = pipe::<u8>();

    assert!(outlet.close());
    assert!(!outlet.close());
    assert!(output.is_closed());
    assert!(!output.close());
}

#[test]
fn test_recv_drains_then_ends_after_close() {
    let (outlet, output) = unbounded_pipe();
    outlet.try_send("last").expect("open");
    drop(outlet);

    assert_eq!(output.recv().now_or_never(), Some(Some("last")));
    assert_eq!(output.recv().now_or_never(), Some(None));
}
