// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # rop
//!
//! Railway-oriented programming for Rust values and async streams.
//!
//! Every step produces an [`Outcome`]: `Success(value)`, `Failure(error)` or
//! `Cancelled(error)`. Steps only act on successes; anything else travels
//! down the error track untouched, so a pipeline reads as a straight line.
//!
//! ## Layers
//!
//! - [`solo`]: combinators for one value, plus retry strategies
//! - [`group`]: run several steps against one value (AND / OR sequencing)
//! - [`mass`]: the same combinators over streams, one task per stage, with
//!   cooperative cancellation that never loses an element
//! - [`fan`]: merge many streams into one, or spread one over many
//! - [`bridge`]: one independent mass pipeline per inner stream of a stream
//!   of streams
//!
//! ## Quick Start
//!
//! ```rust
//! use rop::prelude::*;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let token = CancellationToken::new();
//! let results: Vec<String> = rop::source::from_iter(vec![1, 3])
//!     .mass_validate(
//!         &token,
//!         |v| *v < 2,
//!         |_| RopError::cancellation("stopped"),
//!         "value more than 2",
//!     )
//!     .mass_finally(
//!         &token,
//!         |v| format!("ok {v}"),
//!         |e| format!("error: {e}"),
//!         |_| "cancelled".to_string(),
//!     )
//!     .collect()
//!     .await;
//!
//! assert_eq!(results, vec!["ok 1", "error: value more than 2"]);
//! # }
//! ```

pub use rop_bridge as bridge;
pub use rop_fan as fan;
pub use rop_group as group;
pub use rop_mass as mass;
pub use rop_solo as solo;

pub use rop_core::{
    pipe, pipe_with_capacity, source, unbounded_pipe, CancellationToken, IntoRopError, Outcome,
    Outlet, Pipe, Reviewed, RopError, WaitGroup, PIPE_CAPACITY,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rop_bridge::BridgeOptions;
    pub use rop_core::{CancellationToken, Outcome, Pipe, Reviewed, RopError};
    pub use rop_group::{AndGroup, OrGroup};
    pub use rop_mass::{MassExt, MassSourceExt};
    pub use rop_solo::{
        ExponentialRetryStrategy, FixedRetryStrategy, LinearRetryStrategy, RailwayExt,
        RetryStrategy,
    };
}
