// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Outcome;

/// An outcome together with the verdict of whoever produced it.
///
/// The `accepted` flag is orthogonal to the outcome state. OR groups use it
/// to tell "this alternative settled the question" (accepted, whatever the
/// state) from "this alternative merely failed, try the next one".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewed<T> {
    outcome: Outcome<T>,
    accepted: bool,
}

impl<T> Reviewed<T> {
    pub const fn new(outcome: Outcome<T>, accepted: bool) -> Self {
        Self { outcome, accepted }
    }

    pub const fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    pub const fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }

    pub fn into_parts(self) -> (Outcome<T>, bool) {
        (self.outcome, self.accepted)
    }
}
