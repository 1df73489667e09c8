// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversions between a pipe of pipes and a list of pipes.

use rop_core::{unbounded_pipe, Pipe};

/// Take up to `count` pipes from `outer`; fewer if it ends first.
pub async fn collect_pipes<T>(outer: &Pipe<Pipe<T>>, count: usize) -> Vec<Pipe<T>> {
    let mut pipes = Vec::with_capacity(count);
    while pipes.len() < count {
        match outer.recv().await {
            Some(pipe) => pipes.push(pipe),
            None => break,
        }
    }
    pipes
}

/// Publish `pipes` on an already closed outer pipe, in order.
pub fn pipes_of<T>(pipes: Vec<Pipe<T>>) -> Pipe<Pipe<T>> {
    let (outlet, outer) = unbounded_pipe();
    for pipe in pipes {
        if outlet.try_send(pipe).is_err() {
            break;
        }
    }
    outer
}
