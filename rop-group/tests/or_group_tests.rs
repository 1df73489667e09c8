// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use rop_core::{CancellationToken, Outcome, RopError};
use rop_group::{OrGroup, CANCELLED_MSG};
use rop_solo::switch;
use rop_test_utils::fixtures::{greater_than_zero, less_two_checked, return_failure};
use std::cell::Cell;

fn fail(msg: &str) -> Outcome<i32> {
    Outcome::failure(RopError::validation(msg))
}

#[test]
fn test_or_first_success_wins() {
    let calls = Cell::new(0);

    let outcome = OrGroup::seed(1)
        .alternative(|_| fail("a"))
        .alternative(|v| Outcome::success(v + 1))
        .alternative(|v| {
            calls.set(calls.get() + 1);
            Outcome::success(*v)
        })
        .run();

    assert_eq!(outcome, Outcome::success(2));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_or_exhaustion_aggregates_errors_in_order() {
    // Arrange
    let group = (0..4).fold(OrGroup::seed(0), |group, i| {
        group.alternative(move |_| fail(&format!("branch {i}")))
    });

    // Act
    let outcome = group.run();

    // Assert
    let error = outcome.error().expect("group must fail");
    let messages: Vec<String> = error.errors().iter().map(ToString::to_string).collect();
    assert!(outcome.is_failure());
    assert!(error.is_aggregate());
    assert_eq!(messages, vec!["branch 0", "branch 1", "branch 2", "branch 3"]);
}

#[test]
fn test_or_validate_hook_rejects_success() {
    let outcome = OrGroup::seed(5)
        .alternative(|v| Outcome::success(*v))
        .alternative(|v| Outcome::success(v * 2))
        .validate_with(|_, outcome| {
            if outcome.value().is_some_and(|v| *v > 8) {
                outcome
            } else {
                fail("too small")
            }
        })
        .run();

    assert_eq!(outcome, Outcome::success(10));
}

#[test]
fn test_or_empty_group_fails() {
    let outcome: Outcome<u8> = OrGroup::seed(1).run();

    assert_eq!(outcome, Outcome::failure(RopError::EmptyGroup));
}

#[test]
fn test_or_non_success_seed_short_circuits() {
    let outcome = OrGroup::from_outcome(fail("seed"))
        .alternative(|_| panic!("must not run"))
        .run();

    assert_eq!(outcome, fail("seed"));
}

#[test]
fn test_or_accepted_failure_stops_search() {
    let reviewed = OrGroup::seed(1)
        .alternative_reviewed(|_| fail("vetoed").accept())
        .alternative(|_| panic!("must not run after a veto"))
        .run_reviewed();

    assert!(reviewed.is_accepted());
    assert_eq!(reviewed.into_outcome(), fail("vetoed"));
}

#[test]
fn test_or_unaccepted_success_still_wins() {
    let reviewed = OrGroup::seed(1)
        .alternative_reviewed(|_| fail("first").pass())
        .alternative_reviewed(|v| Outcome::success(*v).pass())
        .run_reviewed();

    assert!(!reviewed.is_accepted());
    assert_eq!(reviewed.into_outcome(), Outcome::success(1));
}

#[test]
fn test_or_observes_cancellation() {
    let token = CancellationToken::new();
    token.cancel();

    let outcome = OrGroup::seed(1)
        .alternative(|_| panic!("must not run"))
        .with_cancellation(&token)
        .run();

    assert_eq!(outcome, Outcome::cancelled(RopError::cancellation(CANCELLED_MSG)));
}

fn reviewed_pipeline(input: i32) -> String {
    let guarded = |tag: &'static str| {
        move |value: &i32| match less_two_checked(value) {
            Err(e) => Outcome::failure(RopError::user(e)).pass(),
            Ok(()) if *value < -10 => {
                Outcome::cancelled(RopError::cancellation(tag)).pass()
            }
            Ok(()) => switch(Outcome::success(*value), greater_than_zero).accept(),
        }
    };

    match OrGroup::seed(input)
        .alternative_reviewed(guarded("canceled 1"))
        .alternative_reviewed(guarded("canceled 2"))
        .run()
    {
        Outcome::Success(v) => format!("all ok {v}"),
        Outcome::Failure(e) | Outcome::Cancelled(e) => return_failure(e),
    }
}

#[test]
fn test_reviewed_pipeline() {
    assert_eq!(reviewed_pipeline(1), "all ok 100");
    assert_eq!(reviewed_pipeline(0), "error: a is less or 0!");
    assert_eq!(
        reviewed_pipeline(3),
        "error: value more than 2\nvalue more than 2"
    );
    assert_eq!(reviewed_pipeline(-20), "error: canceled 1\ncanceled 2");
}
