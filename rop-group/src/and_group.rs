// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Hook, CANCELLED_MSG};
use rop_core::{CancellationToken, Outcome, RopError};

type Step<'a, T> = Box<dyn FnOnce(&T) -> Outcome<T> + 'a>;

/// Runs every step against the same seed value, stopping at the first
/// failure.
///
/// - a non-success seed is returned as is, no step runs
/// - a failed step short-circuits to `Failure(its error)`; the
///   [`validate_with`](Self::validate_with) hook may recover it first
/// - the result is the last [`accumulate_with`](Self::accumulate_with) value,
///   or the last step's outcome when there is no accumulator
/// - no steps at all yields `Failure(RopError::EmptyGroup)`
///
/// # Example
///
/// ```
/// use rop_core::Outcome;
/// use rop_group::AndGroup;
///
/// let mut sum = 0;
/// let total = AndGroup::seed(4)
///     .step(|v| Outcome::success(v + 1))
///     .step(|v| Outcome::success(v * 2))
///     .accumulate_with(|_, outcome: Outcome<i32>| {
///         sum += outcome.value().copied().unwrap_or_default();
///         Outcome::success(sum)
///     })
///     .run();
///
/// assert_eq!(total, Outcome::success(13));
/// ```
pub struct AndGroup<'a, T> {
    seed: Outcome<T>,
    steps: Vec<Step<'a, T>>,
    validate: Option<Hook<'a, T>>,
    accumulate: Option<Hook<'a, T>>,
    token: Option<CancellationToken>,
}

impl<'a, T: 'a> AndGroup<'a, T> {
    pub fn seed(value: T) -> Self {
        Self::from_outcome(Outcome::success(value))
    }

    /// Start from the outcome of an earlier step.
    pub fn from_outcome(seed: Outcome<T>) -> Self {
        Self {
            seed,
            steps: Vec::new(),
            validate: None,
            accumulate: None,
            token: None,
        }
    }

    #[must_use]
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<T> + 'a,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Called with `(step index, outcome)` for every non-success step result.
    /// Returning a success lets the group go on.
    #[must_use]
    pub fn validate_with<F>(mut self, hook: F) -> Self
    where
        F: FnMut(usize, Outcome<T>) -> Outcome<T> + 'a,
    {
        self.validate = Some(Box::new(hook));
        self
    }

    /// Called with `(step index, outcome)` for every successful step result.
    #[must_use]
    pub fn accumulate_with<F>(mut self, hook: F) -> Self
    where
        F: FnMut(usize, Outcome<T>) -> Outcome<T> + 'a,
    {
        self.accumulate = Some(Box::new(hook));
        self
    }

    /// Poll `token` before every step.
    #[must_use]
    pub fn with_cancellation(mut self, token: &CancellationToken) -> Self {
        self.token = Some(token.clone());
        self
    }

    pub fn run(self) -> Outcome<T> {
        let Self {
            seed,
            steps,
            mut validate,
            mut accumulate,
            token,
        } = self;

        let value = match seed.railway() {
            Ok(value) => value,
            Err(seed) => return seed,
        };

        if steps.is_empty() {
            return Outcome::failure(RopError::EmptyGroup);
        }

        let mut last = None;
        for (id, step) in steps.into_iter().enumerate() {
            if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
                rop_core::debug!("and group: cancelled before step {id}");
                return Outcome::cancelled(RopError::cancellation(CANCELLED_MSG));
            }

            let outcome = match step(&value) {
                Outcome::Success(v) => Outcome::Success(v),
                rejected => {
                    let reviewed = match validate.as_mut() {
                        Some(hook) => hook(id, rejected),
                        None => rejected,
                    };
                    match reviewed {
                        Outcome::Success(v) => Outcome::Success(v),
                        Outcome::Failure(e) | Outcome::Cancelled(e) => {
                            rop_core::debug!("and group: step {id} failed: {e}");
                            return Outcome::failure(e);
                        }
                    }
                }
            };

            last = Some(match accumulate.as_mut() {
                Some(hook) => hook(id, outcome),
                None => outcome,
            });
        }

        last.unwrap_or_else(|| Outcome::failure(RopError::EmptyGroup))
    }
}
