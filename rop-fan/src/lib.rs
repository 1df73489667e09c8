// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Fan-in and fan-out of outcome streams.
//!
//! Fan-in merges many inputs into one [`Pipe`](rop_core::Pipe):
//! - [`in_tee`] for outcome streams, [`in_finally`] for plain values, both
//!   discovering their inputs from a stream of streams
//! - [`aggregate`] for a fixed list of streams, without cancellation
//!
//! Fan-out spreads one input over `n` partitions:
//! - [`out_next`] hands input positions out round-robin
//! - [`out_rand`] lets the partitions race for each value
//!
//! Every output is closed once, after all of its writers have finished.

pub mod fan_in;
pub mod fan_out;
pub mod pipes;

pub use self::fan_in::{aggregate, in_finally, in_tee};
pub use self::fan_out::{out_next, out_rand};
pub use self::pipes::{collect_pipes, pipes_of};
