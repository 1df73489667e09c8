// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use rop_core::{Outcome, RopError};
use rop_solo::{
    and_validate, and_validate_or_cancel, and_validate_with, cancel_with, check, check_or_cancel,
    double_map, double_tee, fail_with, finally, map, succeed_with, switch, tee, tee_with, try_map,
    validate, validate_or_cancel, validate_with,
};
use rop_test_utils::fixtures::{
    equal_hundred, greater_than_zero, less_two, less_two_checked, not_five, LESS_TWO_MSG,
};
use rop_test_utils::TestError;
use std::cell::Cell;

fn failed<T>(msg: &str) -> Outcome<T> {
    Outcome::failure(RopError::validation(msg))
}

fn cancelled<T>(msg: &str) -> Outcome<T> {
    Outcome::cancelled(RopError::cancellation(msg))
}

#[test]
fn test_validate_accepts_and_rejects() {
    assert_eq!(validate(1, less_two, LESS_TWO_MSG), Outcome::success(1));
    assert_eq!(validate(3, less_two, LESS_TWO_MSG), failed(LESS_TWO_MSG));
}

#[test]
fn test_validate_with_carries_user_error() {
    let rejected = validate_with(3, less_two_checked);

    assert!(rejected.is_failure());
    assert_eq!(
        rejected.error().and_then(RopError::user_source).map(ToString::to_string),
        Some(LESS_TWO_MSG.to_string())
    );
    assert_eq!(validate_with(1, less_two_checked), Outcome::success(1));
}

#[test]
fn test_validate_or_cancel_cancels_on_false() {
    assert_eq!(validate_or_cancel(9, less_two, "stop"), cancelled("stop"));
    assert_eq!(validate_or_cancel(0, less_two, "stop"), Outcome::success(0));
}

#[test]
fn test_and_validate_revalidates_success_only() {
    assert_eq!(
        and_validate(Outcome::success(5), not_five, "value is 5"),
        failed("value is 5")
    );
    assert_eq!(
        and_validate(Outcome::success(1), not_five, "value is 5"),
        Outcome::success(1)
    );

    let calls = Cell::new(0);
    let passthrough = and_validate(failed::<i32>("earlier"), |_| {
        calls.set(calls.get() + 1);
        true
    }, "unused");

    assert_eq!(passthrough, failed("earlier"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_and_validate_variants_keep_cancelled() {
    let input = cancelled::<i32>("upstream");

    assert_eq!(and_validate_with(input.clone(), less_two_checked), input);
    assert_eq!(and_validate_or_cancel(input.clone(), less_two, "x"), input);
    assert_eq!(
        and_validate_or_cancel(Outcome::success(4), less_two, "x"),
        cancelled("x")
    );
}

#[test]
fn test_switch_retags_errors() {
    assert_eq!(switch(Outcome::success(1), greater_than_zero), Outcome::success(100));
    assert_eq!(
        switch(Outcome::success(0), greater_than_zero),
        failed("a is less or 0!")
    );

    let retagged: Outcome<String> =
        switch(cancelled::<i32>("stop"), |v| Outcome::success(v.to_string()));
    assert_eq!(retagged, cancelled("stop"));
}

#[test]
fn test_map_lifts_success_only() {
    assert_eq!(map(Outcome::success(2), |v| v * 10), Outcome::success(20));
    assert_eq!(map(failed::<i32>("bad"), |v| v * 10), failed("bad"));
    assert_eq!(map(cancelled::<i32>("stop"), |v| v * 10), cancelled("stop"));
}

#[test]
fn test_tee_runs_side_effect_on_success_only() {
    let seen = Cell::new(0);

    let ok = tee(Outcome::success(7), |v| seen.set(*v));
    let ko = tee(failed::<i32>("bad"), |_| seen.set(-1));

    assert_eq!(ok, Outcome::success(7));
    assert_eq!(ko, failed("bad"));
    assert_eq!(seen.get(), 7);
}

#[test]
fn test_tee_with_error_fails_outcome() {
    let result = tee_with(Outcome::success(1), |_| Err(TestError::Transient(1)));

    assert!(result.is_failure());
    assert_eq!(result.error().map(ToString::to_string).as_deref(), Some("transient failure #1"));
    assert_eq!(tee_with(Outcome::success(1), |_| Ok::<(), TestError>(())), Outcome::success(1));
}

#[test]
fn test_double_tee_observes_each_track() {
    let success_seen = Cell::new(false);
    let error_seen = Cell::new(false);

    double_tee(Outcome::success(1), |_| success_seen.set(true), |_| error_seen.set(true));
    assert!(success_seen.get() && !error_seen.get());

    success_seen.set(false);
    let out = double_tee(
        cancelled::<i32>("c"),
        |_| success_seen.set(true),
        |_| error_seen.set(true),
    );
    assert!(!success_seen.get() && error_seen.get());
    assert_eq!(out, cancelled("c"));
}

#[test]
fn test_double_map_maps_success() {
    let out: Outcome<String> = double_map(
        Outcome::success(3),
        |v: i32| v.to_string(),
        |e| e.to_string(),
        |e| e.to_string(),
    );

    assert_eq!(out, Outcome::success("3".to_string()));
}

#[test]
fn test_double_map_discards_handler_result_on_failure() {
    let failure_calls = Cell::new(0);
    let cancel_calls = Cell::new(0);

    let out: Outcome<String> = double_map(
        failed::<i32>("boom"),
        |v| v.to_string(),
        |_| {
            failure_calls.set(failure_calls.get() + 1);
            "replacement".to_string()
        },
        |_| {
            cancel_calls.set(cancel_calls.get() + 1);
            "replacement".to_string()
        },
    );

    assert_eq!(out, failed("boom"));
    assert_eq!((failure_calls.get(), cancel_calls.get()), (1, 0));
}

#[test]
fn test_double_map_keeps_cancel_tag() {
    let cancel_calls = Cell::new(0);

    let out: Outcome<String> = double_map(
        cancelled::<i32>("stop"),
        |v| v.to_string(),
        |e| e.to_string(),
        |e| {
            cancel_calls.set(cancel_calls.get() + 1);
            e.to_string()
        },
    );

    assert_eq!(out, cancelled("stop"));
    assert_eq!(cancel_calls.get(), 1);
}

#[test]
fn test_try_map_captures_error() {
    assert_eq!(try_map(Outcome::success(100), equal_hundred), Outcome::success("OK".to_string()));

    let err = try_map(Outcome::success(99), equal_hundred);
    assert_eq!(err.error().map(ToString::to_string).as_deref(), Some("! 100"));
    assert!(err.is_failure());
}

#[test]
fn test_try_map_passes_rop_error_through_unwrapped() {
    let out: Outcome<i32> = try_map(Outcome::success(1), |_| Err(RopError::validation("inner")));

    assert_eq!(out, failed("inner"));
}

#[test]
fn test_check_reduces_to_bool() {
    assert_eq!(check(Outcome::success(1), less_two, "nope"), Outcome::success(true));
    assert_eq!(check(Outcome::success(4), less_two, "nope"), failed("nope"));
    assert_eq!(check(cancelled::<i32>("c"), less_two, "nope"), cancelled("c"));
}

#[test]
fn test_check_or_cancel_cancels_on_false() {
    assert_eq!(check_or_cancel(Outcome::success(4), less_two, "halt"), cancelled("halt"));
    assert_eq!(check_or_cancel(failed::<i32>("f"), less_two, "halt"), failed("f"));
}

#[test]
fn test_finally_collapses_tracks() {
    let ok = finally(Outcome::success(2), |v| v * 2, |_| -1);
    let ko = finally(cancelled::<i32>("c"), |v| v * 2, |e| {
        assert!(e.is_cancellation());
        -1
    });

    assert_eq!((ok, ko), (4, -1));
}

#[test]
fn test_unconditional_constructors_ignore_state() {
    let from_failure: Outcome<usize> =
        succeed_with(failed::<i32>("f"), |o| usize::from(o.is_failure()));
    let from_success: Outcome<()> =
        fail_with(Outcome::success(1), |_| RopError::validation("forced"));
    let cancelled_success: Outcome<()> =
        cancel_with(Outcome::success(1), |_| RopError::cancellation("halt"));
    let cancelled_failure: Outcome<()> = cancel_with(failed::<i32>("f"), |o| {
        let previous = o.error().map(ToString::to_string).unwrap_or_default();
        RopError::cancellation(format!("was {previous}"))
    });

    assert_eq!(from_failure, Outcome::success(1));
    assert_eq!(from_success, failed("forced"));
    assert_eq!(cancelled_success, cancelled("halt"));
    assert_eq!(cancelled_failure, cancelled("was f"));
}
