// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::FutureExt;
use rop_core::WaitGroup;
use std::time::Duration;

#[test]
fn test_empty_group_is_ready() {
    let group = WaitGroup::new();
    assert!(group.wait().now_or_never().is_some());
}

#[test]
fn test_add_and_done_track_count() {
    let group = WaitGroup::new();

    group.add(2);
    group.done();

    assert_eq!(group.count(), 1);
    assert!(group.wait().now_or_never().is_none());

    group.done();

    assert_eq!(group.count(), 0);
    assert!(group.wait().now_or_never().is_some());
}

#[test]
fn test_extra_done_does_not_underflow() {
    let group = WaitGroup::new();

    group.done();

    assert_eq!(group.count(), 0);
}

#[test]
fn test_guard_marks_done_on_drop() {
    let group = WaitGroup::new();
    let guard = group.guard();
    assert_eq!(group.count(), 1);

    drop(guard);

    assert_eq!(group.count(), 0);
}

#[tokio::test]
async fn test_wait_resolves_after_all_tasks_finish() -> anyhow::Result<()> {
    // Arrange
    let group = WaitGroup::new();
    for delay in [5_u64, 10, 15] {
        let guard = group.guard();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            drop(guard);
        });
    }

    // Act
    tokio::time::timeout(Duration::from_secs(1), group.wait()).await?;

    // Assert
    assert_eq!(group.count(), 0);
    Ok(())
}
