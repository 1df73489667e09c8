// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Stream-of-streams bridge.
//!
//! A supervisor task reads inner streams from an outer stream and starts one
//! independent mass pipeline per inner stream. Results are published either
//! on one fresh pipe per input ([`bridge_paired`], the k-th published pipe
//! belongs to the k-th input) or on a single shared pipe ([`bridge_shared`]).
//!
//! The [`operators`] module wraps every mass operator this way.
//!
//! The supervisor checks the cancellation token before each dispatch and stops
//! starting pipelines once it fires. Pipelines already running keep going:
//! their mass stages turn the remaining values into `Cancelled` outcomes and
//! every one of them is forwarded. Outputs close after the supervisor and all
//! pipelines it started are done.

pub mod bridge;
pub mod operators;

pub use self::bridge::{bridge_paired, bridge_shared, BridgeOptions};
pub use self::operators::{
    and_validate, check, double_map, finally, map, switch, tee, try_map, validate,
};
