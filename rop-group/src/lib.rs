// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Sequencing of railway steps that share one input.
//!
//! - [`AndGroup`]: every step must succeed
//! - [`OrGroup`]: the first alternative that settles wins
//!
//! Groups run on the calling thread, one step at a time.

pub mod and_group;
pub mod or_group;

pub use self::and_group::AndGroup;
pub use self::or_group::OrGroup;

use rop_core::Outcome;

/// Message of the cancellation returned when a group observes its token.
pub const CANCELLED_MSG: &str = "group cancelled";

type Hook<'a, T> = Box<dyn FnMut(usize, Outcome<T>) -> Outcome<T> + 'a>;
