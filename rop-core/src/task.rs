// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic detached task spawning.
//!
//! - **Tokio**: `tokio::spawn` (default, `runtime-tokio`)
//! - **smol**: `smol::spawn(..).detach()` (`runtime-smol`)
//!
//! Streaming tasks are never joined through a handle: they end when their
//! input ends or their consumer goes away, and joins happen through
//! [`WaitGroup`](crate::WaitGroup).

use std::future::Future;

/// Spawn `future` on the configured runtime and detach it.
#[cfg(feature = "runtime-tokio")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let _detached = tokio::spawn(future);
}

/// Spawn `future` on the configured runtime and detach it.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    smol::spawn(future).detach();
}

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("rop-core needs a runtime: enable `runtime-tokio` or `runtime-smol`");
