// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use rop_core::{Outcome, RopError};

#[test]
fn test_states_are_exclusive() {
    let success = Outcome::success(1);
    let failure: Outcome<i32> = Outcome::failure(RopError::validation("bad"));
    let cancelled: Outcome<i32> = Outcome::cancelled(RopError::cancellation("stop"));

    assert!(success.is_success() && !success.is_failure() && !success.is_cancelled());
    assert!(!failure.is_success() && failure.is_failure() && !failure.is_cancelled());
    assert!(!cancelled.is_success() && !cancelled.is_failure() && cancelled.is_cancelled());
}

#[test]
fn test_success_carries_no_error() {
    let success = Outcome::success("value");

    assert_eq!(success.value(), Some(&"value"));
    assert!(success.error().is_none());
    assert_eq!(success.into_value(), Some("value"));
}

#[test]
fn test_failure_carries_no_value() {
    let failure: Outcome<u8> = Outcome::failure(RopError::validation("bad"));

    assert!(failure.value().is_none());
    assert_eq!(failure.into_error(), Some(RopError::validation("bad")));
}

#[test]
fn test_railway_retags_failure_keeping_error() {
    let failure: Outcome<i32> = Outcome::failure(RopError::validation("bad"));

    let retagged = failure.railway::<String>().unwrap_err();

    assert_eq!(retagged, Outcome::failure(RopError::validation("bad")));
}

#[test]
fn test_railway_retags_cancelled_keeping_tag() {
    let cancelled: Outcome<i32> = Outcome::cancelled(RopError::cancellation("stop"));

    let retagged = cancelled.railway::<Vec<u8>>().unwrap_err();

    assert!(retagged.is_cancelled());
    assert_eq!(retagged.error(), Some(&RopError::cancellation("stop")));
}

#[test]
fn test_railway_yields_success_value() {
    assert_eq!(Outcome::success(7).railway::<()>(), Ok(7));
}

#[test]
fn test_equality_distinguishes_tag() {
    let err = RopError::validation("same");

    assert_ne!(
        Outcome::<i32>::failure(err.clone()),
        Outcome::<i32>::cancelled(err)
    );
    assert_eq!(Outcome::success(3), Outcome::success(3));
    assert_ne!(Outcome::success(3), Outcome::success(4));
}

#[test]
fn test_accept_and_pass_keep_outcome() {
    let accepted = Outcome::success(1).accept();
    let passed: rop_core::Reviewed<i32> = Outcome::failure(RopError::validation("no")).pass();

    assert!(accepted.is_accepted());
    assert_eq!(accepted.outcome(), &Outcome::success(1));
    assert!(!passed.is_accepted());
    assert!(passed.into_outcome().is_failure());
}

#[test]
fn test_result_conversions() -> anyhow::Result<()> {
    let from_ok: Outcome<i32> = Ok::<_, RopError>(5).into();
    let from_err: Outcome<i32> = Err(RopError::validation("nope")).into();
    let back: Result<i32, RopError> = Outcome::success(9).into();

    assert_eq!(from_ok, Outcome::success(5));
    assert_eq!(from_err, Outcome::failure(RopError::validation("nope")));
    assert_eq!(back?, 9);
    Ok(())
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value")]
fn test_unwrap_panics_on_failure() {
    let failure: Outcome<i32> = Outcome::failure(RopError::validation("bad"));
    failure.unwrap();
}
