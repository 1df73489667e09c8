// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for railway-oriented stream processing.
//!
//! - [`Outcome`]: the tri-state value (`Success` / `Failure` / `Cancelled`)
//!   every combinator consumes and produces
//! - [`Pipe`] / [`Outlet`]: the ordered channel streams flow through
//! - [`CancellationToken`]: cooperative cancellation, polled without blocking
//! - [`WaitGroup`]: counted join barrier used before closing shared outputs
//! - [`spawn`] / [`sleep`]: runtime shims selected by cargo feature

pub mod cancellation_token;
pub mod logging;
pub mod outcome;
pub mod pipe;
pub mod reviewed;
pub mod source;
pub mod task;
pub mod timer;
pub mod wait_group;

pub use self::cancellation_token::CancellationToken;
pub use self::outcome::Outcome;
pub use self::pipe::{pipe, pipe_with_capacity, unbounded_pipe, Outlet, Pipe, PIPE_CAPACITY};
pub use self::reviewed::Reviewed;
pub use self::task::spawn;
pub use self::timer::sleep;
pub use self::wait_group::{WaitGroup, WaitGuard};
pub use rop_error::{IntoRopError, RopError};

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;
