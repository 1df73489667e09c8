// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use rop_bridge::{and_validate, check, double_map, finally, map, switch, tee, try_map, validate};
use rop_core::{source::from_iter, CancellationToken, Outcome, Pipe, RopError};
use rop_fan::{in_finally, pipes_of};
use rop_test_utils::{collect_nested_within, collect_within};
use rop_test_utils::fixtures::{
    add_chars, cancel_error, cancel_result, equal_hundred, greater_than_zero, less_two,
    not_five, return_failure, return_success, ALL_OK, LESS_TWO_MSG, NOT_FIVE_MSG,
    NOT_POSITIVE_MSG,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const TIMEOUT_MS: u64 = 1000;

fn reference_pipeline(token: &CancellationToken, inputs: Pipe<Pipe<i32>>) -> Pipe<Pipe<String>> {
    let validated = validate(token, inputs, less_two, cancel_error, LESS_TWO_MSG);
    let checked = and_validate(token, validated, not_five, cancel_error, NOT_FIVE_MSG);
    let switched = switch(token, checked, greater_than_zero, cancel_error);
    let tried = try_map(token, switched, equal_hundred, cancel_error);
    let teed = tee(token, tried, |_: &String| {}, cancel_error);
    let mapped = map(token, teed, add_chars, cancel_error);
    let doubled = double_map(
        token,
        mapped,
        |s: String| s,
        RopError::to_string,
        RopError::to_string,
        cancel_error,
    );
    finally(token, doubled, return_success, return_failure, cancel_result)
}

#[tokio::test]
async fn test_reference_pipeline_per_inner_stream() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let inputs = pipes_of(vec![from_iter(vec![1, 3]), from_iter(vec![0, 1, 5])]);

    // Act
    let collected = collect_nested_within(reference_pipeline(&token, inputs), TIMEOUT_MS).await;

    // Assert
    let more_than_two = format!("error: {LESS_TWO_MSG}");
    assert_eq!(
        collected,
        vec![
            vec![ALL_OK.to_string(), more_than_two.clone()],
            vec![format!("error: {NOT_POSITIVE_MSG}"), ALL_OK.to_string(), more_than_two],
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_bridge_outputs_merge_with_in_finally() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let inputs = pipes_of((0..8).map(|_| from_iter(vec![1, 1, 3])).collect());

    // Act
    let merged = in_finally(&token, reference_pipeline(&token, inputs));
    let results = collect_within(merged, TIMEOUT_MS).await;

    // Assert
    assert_eq!(results.len(), 24);
    assert_eq!(results.iter().filter(|r| *r == ALL_OK).count(), 16);
    Ok(())
}

#[tokio::test]
async fn test_check_and_tee_share_user_functions() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let inputs = pipes_of(vec![
        from_iter(vec![Outcome::success(1), Outcome::success(4)]),
        from_iter(vec![Outcome::success(0)]),
    ]);

    // Act
    let teed = tee(
        &token,
        inputs,
        move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        cancel_error,
    );
    let checked = check(&token, teed, less_two, cancel_error, "too big");
    let collected = collect_nested_within(checked, TIMEOUT_MS).await;

    // Assert
    assert_eq!(
        collected,
        vec![
            vec![Outcome::success(true), Outcome::failure(RopError::validation("too big"))],
            vec![Outcome::success(true)],
        ]
    );
    assert_eq!(seen.load(Ordering::SeqCst), 3);
    Ok(())
}
