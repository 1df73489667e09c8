// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Steps of the reference pipeline shared by solo, mass and bridge tests.
//!
//! Input 1 walks the whole success track and ends as `"all ok"`, 3 is
//! rejected by [`less_two`], 0 is rejected by [`greater_than_zero`] and 5 by
//! [`less_two`] before [`not_five`] gets a say.

use rop_core::{Outcome, RopError};

pub const LESS_TWO_MSG: &str = "value more than 2";
pub const NOT_FIVE_MSG: &str = "value is 5";
pub const NOT_POSITIVE_MSG: &str = "a is less or 0!";
pub const NOT_HUNDRED_MSG: &str = "! 100";
pub const CANCELLED_MSG: &str = "some error";
pub const ALL_OK: &str = "all ok";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("{0}")]
    Rejected(String),
    #[error("transient failure #{0}")]
    Transient(u32),
}

pub fn less_two(value: &i32) -> bool {
    *value < 2
}

pub fn not_five(value: &i32) -> bool {
    *value != 5
}

pub fn less_two_checked(value: &i32) -> Result<(), TestError> {
    if less_two(value) {
        Ok(())
    } else {
        Err(TestError::Rejected(LESS_TWO_MSG.to_string()))
    }
}

pub fn not_five_checked(value: &i32) -> Result<(), TestError> {
    if not_five(value) {
        Ok(())
    } else {
        Err(TestError::Rejected(NOT_FIVE_MSG.to_string()))
    }
}

pub fn greater_than_zero(value: i32) -> Outcome<i32> {
    if value > 0 {
        Outcome::success(100)
    } else {
        Outcome::failure(RopError::validation(NOT_POSITIVE_MSG))
    }
}

pub fn equal_hundred(value: i32) -> Result<String, TestError> {
    if value == 100 {
        Ok("OK".to_string())
    } else {
        Err(TestError::Rejected(NOT_HUNDRED_MSG.to_string()))
    }
}

pub fn add_chars(value: String) -> String {
    value + "fff"
}

pub fn return_success(_value: String) -> String {
    ALL_OK.to_string()
}

pub fn return_failure(error: RopError) -> String {
    format!("error: {error}")
}

/// Cancel function for streaming operators: ignores the element.
pub fn cancel_error<T>(_element: T) -> RopError {
    RopError::cancellation(CANCELLED_MSG)
}

/// Cancel function for terminal streaming operators.
pub fn cancel_result<T>(_element: T) -> String {
    CANCELLED_MSG.to_string()
}
