// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::TrySendError;
use rop_core::{unbounded_pipe, Outlet, Pipe};

/// A sender and the pipe it feeds.
///
/// Sends never suspend, so a test can push values from its own body and then
/// await what the operator under test produced.
pub struct TestChannel<T> {
    pub sender: Outlet<T>,
    pub stream: Pipe<T>,
}

impl<T> TestChannel<T> {
    pub fn new() -> Self {
        let (sender, stream) = unbounded_pipe();
        Self { sender, stream }
    }

    /// Send a value through the channel.
    ///
    /// # Errors
    ///
    /// Returns the value back if every receiver has been dropped.
    pub fn send(&self, value: T) -> Result<(), T> {
        self.sender.try_send(value).map_err(TrySendError::into_inner)
    }

    /// Close the sending side; the stream ends once drained.
    pub fn close(self) {
        drop(self.sender);
    }
}

impl<T> Default for TestChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`TestChannel::new`].
pub fn test_channel<T>() -> TestChannel<T> {
    TestChannel::new()
}

/// Helper to create multiple test channels at once.
pub struct TestChannels;

impl TestChannels {
    pub fn two<T>() -> (TestChannel<T>, TestChannel<T>) {
        (TestChannel::new(), TestChannel::new())
    }

    pub fn three<T>() -> (TestChannel<T>, TestChannel<T>, TestChannel<T>) {
        (TestChannel::new(), TestChannel::new(), TestChannel::new())
    }
}
