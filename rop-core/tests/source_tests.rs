// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::StreamExt;
use rop_core::source::{from_iter, from_iter_cancel_after, from_iter_cancel_when};
use rop_core::CancellationToken;
use std::time::Duration;

#[tokio::test]
async fn test_from_iter_emits_all_items_then_closes() {
    let items: Vec<u32> = from_iter(1..=4).collect().await;
    assert_eq!(items, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_from_iter_empty_closes_immediately() {
    let items: Vec<u32> = from_iter(Vec::<u32>::new()).collect().await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_from_iter_cancel_when_cancels_before_selected_item() {
    // Arrange
    let token = CancellationToken::new();
    let mut source = from_iter_cancel_when(&token, vec![10, 20, 30], |index, _| index == 1);

    // Act
    let first = source.next().await;
    let rest: Vec<i32> = source.collect().await;

    // Assert
    assert_eq!(first, Some(10));
    assert_eq!(rest, vec![20, 30]);
    assert!(token.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_from_iter_cancel_after_cancels_once_timeout_elapses() {
    // Arrange
    let token = CancellationToken::new();
    let source = from_iter_cancel_after(&token, vec![1, 2, 3], Duration::from_millis(50));

    // Act
    let items: Vec<i32> = source.collect().await;
    tokio::time::sleep(Duration::from_millis(40)).await;
    let before_timeout = token.is_cancelled();
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Assert
    assert_eq!(items, vec![1, 2, 3]);
    assert!(!before_timeout);
    assert!(token.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_from_iter_cancel_after_delivers_items_when_already_cancelled() {
    // Arrange
    let token = CancellationToken::new();
    token.cancel();

    // Act
    let source = from_iter_cancel_after(&token, vec![4, 5], Duration::from_secs(3600));
    let items: Vec<i32> = source.collect().await;

    // Assert
    assert_eq!(items, vec![4, 5]);
    assert!(token.is_cancelled());
}
