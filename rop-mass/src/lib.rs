// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Railway combinators over streams.
//!
//! Every operator consumes a stream, spawns one task and returns a
//! [`Pipe`](rop_core::Pipe) with exactly one output per input, in input order.
//!
//! # Cancellation
//!
//! Before each element the task polls its [`CancellationToken`](rop_core::CancellationToken)
//! without blocking. Once the token fires, that element and every element
//! after it is converted with the caller's cancel function and forwarded as
//! `Cancelled`; the task keeps draining until its input ends, then closes its
//! output. A downstream operator therefore always sees the full stream.
//!
//! If the consumer drops an output pipe, the producing task stops at its next
//! send.

mod drive;
pub mod ext;
pub mod operators;
pub mod retry;

pub use self::ext::{MassExt, MassSourceExt};
pub use self::operators::{
    and_validate, check, double_map, finally, map, switch, tee, tee_with, try_map, validate,
    validate_with,
};
pub use self::retry::try_with_retry;
