// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Counted join barrier.
//!
//! Fan-in and bridge tasks register every writer of a shared output here and
//! close the output only after [`WaitGroup::wait`] resolves.

use event_listener::Event;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Cloneable counter that can be awaited until it drops to zero.
///
/// # Example
///
/// ```
/// use rop_core::WaitGroup;
///
/// # #[tokio::main]
/// # async fn main() {
/// let group = WaitGroup::new();
/// let guard = group.guard();
/// assert_eq!(group.count(), 1);
///
/// tokio::spawn(async move {
///     let _guard = guard;
/// });
///
/// group.wait().await;
/// assert_eq!(group.count(), 0);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    count: AtomicUsize,
    event: Event,
}

impl WaitGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `n` more participants.
    pub fn add(&self, n: usize) {
        self.inner.count.fetch_add(n, Ordering::AcqRel);
    }

    /// Mark one participant as finished.
    ///
    /// Calling `done` more often than `add` is a caller bug; it is logged and
    /// otherwise ignored.
    pub fn done(&self) {
        let previous = self
            .inner
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        match previous {
            Ok(1) => {
                self.inner.event.notify(usize::MAX);
            }
            Ok(_) => {}
            Err(_) => {
                crate::error!("WaitGroup::done called more times than add");
            }
        }
    }

    /// Register one participant and return a guard that marks it finished on
    /// drop.
    #[must_use = "dropping the guard immediately marks the participant as done"]
    pub fn guard(&self) -> WaitGuard {
        self.add(1);
        WaitGuard {
            group: self.clone(),
        }
    }

    /// Number of participants still running.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::Acquire)
    }

    /// Wait until every registered participant is done.
    pub async fn wait(&self) {
        loop {
            if self.count() == 0 {
                return;
            }

            let listener = self.inner.event.listen();

            if self.count() == 0 {
                return;
            }

            listener.await;
        }
    }
}

/// RAII participant of a [`WaitGroup`].
#[derive(Debug)]
pub struct WaitGuard {
    group: WaitGroup,
}

impl Drop for WaitGuard {
    fn drop(&mut self) {
        self.group.done();
    }
}
