// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rop workspace.
//!
//! For development and testing only, not for production code.
//!
//! - [`TestChannel`]: an unbounded [`Pipe`](rop_core::Pipe) plus its sender,
//!   so a test can feed an operator step by step
//! - [`helpers`]: timeout-guarded assertions on streams
//! - [`fixtures`]: the predicates and mappers of the reference pipeline
//!   (`validate < 2`, `!= 5`, `> 0 -> 100`, `== 100 -> "OK"`, `+ "fff"`)

pub mod fixtures;
pub mod helpers;
pub mod test_channel;

pub use self::fixtures::TestError;
pub use self::helpers::{
    assert_no_element_emitted, collect_each_within, collect_nested_within, collect_within,
    next_within,
};
pub use self::test_channel::{test_channel, TestChannel, TestChannels};
