// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered channels connecting streaming operators.
//!
//! A [`Pipe`] is the receiving half and a [`futures::Stream`]; an [`Outlet`]
//! is the sending half. The channel closes when the last outlet drops or when
//! either side calls `close`. Receivers then drain what is buffered and see
//! end-of-stream.

use async_channel::{Receiver, TryRecvError};
use futures::Stream;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Capacity of the pipes created by [`pipe`].
///
/// With a single slot a producer runs at most one element ahead of its
/// consumer, so every send is a backpressure point.
pub const PIPE_CAPACITY: usize = 1;

/// Sending half of a [`Pipe`].
pub type Outlet<T> = async_channel::Sender<T>;

/// Receiving half of a channel, usable as a `Stream`.
///
/// Cloning a pipe yields another consumer of the same channel: each element
/// goes to exactly one of the clones.
pub struct Pipe<T> {
    rx: Pin<Box<Receiver<T>>>,
}

/// Create a pipe with [`PIPE_CAPACITY`] slots.
pub fn pipe<T>() -> (Outlet<T>, Pipe<T>) {
    pipe_with_capacity(PIPE_CAPACITY)
}

/// Create a pipe with `capacity` slots (at least one).
pub fn pipe_with_capacity<T>(capacity: usize) -> (Outlet<T>, Pipe<T>) {
    let (tx, rx) = async_channel::bounded(capacity.max(1));
    (tx, Pipe::new(rx))
}

/// Create a pipe whose sends never suspend.
pub fn unbounded_pipe<T>() -> (Outlet<T>, Pipe<T>) {
    let (tx, rx) = async_channel::unbounded();
    (tx, Pipe::new(rx))
}

impl<T> Pipe<T> {
    fn new(rx: Receiver<T>) -> Self {
        Self { rx: Box::pin(rx) }
    }

    /// Receive the next element, or `None` once the pipe is closed and empty.
    pub async fn recv(&self) -> Option<T> {
        self.rx.recv().await.ok()
    }

    /// Receive without suspending.
    ///
    /// Returns `None` both when the pipe is momentarily empty and when it is
    /// closed; use [`Pipe::is_closed`] to tell them apart.
    pub fn try_recv(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(item) => Some(item),
            Err(TryRecvError::Empty | TryRecvError::Closed) => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.rx.is_closed()
    }

    /// Number of buffered elements.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Close the channel from the receiving side. Pending sends fail.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        self.rx.close()
    }
}

impl<T> Clone for Pipe<T> {
    fn clone(&self) -> Self {
        Self::new(Receiver::clone(&self.rx))
    }
}

impl<T> fmt::Debug for Pipe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe")
            .field("len", &self.rx.len())
            .field("closed", &self.rx.is_closed())
            .finish()
    }
}

impl<T> Stream for Pipe<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rx.size_hint()
    }
}
