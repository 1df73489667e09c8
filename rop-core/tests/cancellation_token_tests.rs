// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::FutureExt;
use rop_core::CancellationToken;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::default();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token = CancellationToken::new();
    let clone = token.clone();

    clone.cancel();

    assert!(token.is_cancelled());
}

#[test]
fn test_cancelled_pending_until_cancel() {
    let token = CancellationToken::new();

    assert!(token.cancelled().now_or_never().is_none());
    token.cancel();
    assert!(token.cancelled().now_or_never().is_some());
}

#[tokio::test]
async fn test_cancelled_wakes_every_waiter() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let waiters: Vec<_> = (0..8)
        .map(|_| {
            let token = token.clone();
            tokio::spawn(async move { token.cancelled().await })
        })
        .collect();
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Act
    token.cancel();

    // Assert
    for waiter in waiters {
        tokio::time::timeout(Duration::from_secs(1), waiter).await??;
    }
    Ok(())
}
