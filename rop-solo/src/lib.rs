// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Railway combinators over a single [`Outcome`](rop_core::Outcome).
//!
//! Free functions live in [`solo`] and are re-exported at the crate root;
//! [`RailwayExt`] offers the same operations as methods. [`retry`] holds the
//! retry strategies and the retrying form of `try_map`.

pub mod ext;
pub mod retry;
pub mod solo;

pub use self::ext::RailwayExt;
pub use self::retry::{
    try_with_retry, try_with_retry_async, ExponentialRetryStrategy, FixedRetryStrategy,
    LinearRetryStrategy, RetryStrategy, DEFAULT_EXPONENTIAL_FACTOR,
};
pub use self::solo::{
    and_validate, and_validate_or_cancel, and_validate_with, cancel_with, check, check_or_cancel,
    double_map, double_tee, fail_with, finally, map, succeed_with, switch, tee, tee_with, try_map,
    validate, validate_or_cancel, validate_with,
};
