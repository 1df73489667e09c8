// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Hook, CANCELLED_MSG};
use rop_core::{CancellationToken, Outcome, Reviewed, RopError};

type Alternative<'a, T> = Box<dyn FnOnce(&T) -> Reviewed<T> + 'a>;

/// Tries alternatives against the same seed value until one settles.
///
/// A plain alternative settles by succeeding (and passing the optional
/// [`validate_with`](Self::validate_with) hook). A reviewed alternative can
/// also settle by accepting its outcome, whatever the outcome's state. When
/// every alternative fails the group fails with `RopError::Aggregate` of all
/// their errors, in order.
///
/// # Example
///
/// ```
/// use rop_core::{Outcome, RopError};
/// use rop_group::OrGroup;
///
/// let outcome = OrGroup::seed(3)
///     .alternative(|_| Outcome::failure(RopError::validation("primary down")))
///     .alternative(|v| Outcome::success(v * 10))
///     .run();
///
/// assert_eq!(outcome, Outcome::success(30));
/// ```
pub struct OrGroup<'a, T> {
    seed: Outcome<T>,
    alternatives: Vec<Alternative<'a, T>>,
    validate: Option<Hook<'a, T>>,
    token: Option<CancellationToken>,
}

impl<'a, T: 'a> OrGroup<'a, T> {
    pub fn seed(value: T) -> Self {
        Self::from_outcome(Outcome::success(value))
    }

    pub fn from_outcome(seed: Outcome<T>) -> Self {
        Self {
            seed,
            alternatives: Vec::new(),
            validate: None,
            token: None,
        }
    }

    #[must_use]
    pub fn alternative<F>(self, alternative: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<T> + 'a,
    {
        self.alternative_reviewed(move |value| alternative(value).pass())
    }

    /// Add an alternative that reports whether it settles the question.
    ///
    /// - accepted: the search stops with this outcome
    /// - not accepted, success: the search stops as for a plain alternative
    /// - not accepted, failure: the error is recorded and the next
    ///   alternative runs
    #[must_use]
    pub fn alternative_reviewed<F>(mut self, alternative: F) -> Self
    where
        F: FnOnce(&T) -> Reviewed<T> + 'a,
    {
        self.alternatives.push(Box::new(alternative));
        self
    }

    /// Called with `(alternative index, outcome)` for every successful,
    /// not accepted outcome. Returning a non-success rejects it.
    #[must_use]
    pub fn validate_with<F>(mut self, hook: F) -> Self
    where
        F: FnMut(usize, Outcome<T>) -> Outcome<T> + 'a,
    {
        self.validate = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: &CancellationToken) -> Self {
        self.token = Some(token.clone());
        self
    }

    pub fn run(self) -> Outcome<T> {
        self.run_reviewed().into_outcome()
    }

    /// Like [`run`](Self::run), also telling whether an alternative accepted
    /// the outcome.
    pub fn run_reviewed(self) -> Reviewed<T> {
        let Self {
            seed,
            alternatives,
            mut validate,
            token,
        } = self;

        let value = match seed.railway() {
            Ok(value) => value,
            Err(seed) => return seed.pass(),
        };

        if alternatives.is_empty() {
            return Outcome::failure(RopError::EmptyGroup).pass();
        }

        let mut errors = Vec::with_capacity(alternatives.len());
        for (id, alternative) in alternatives.into_iter().enumerate() {
            if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
                rop_core::debug!("or group: cancelled before alternative {id}");
                return Outcome::cancelled(RopError::cancellation(CANCELLED_MSG)).pass();
            }

            let (outcome, accepted) = alternative(&value).into_parts();
            if accepted {
                return outcome.accept();
            }

            let outcome = match (outcome, validate.as_mut()) {
                (Outcome::Success(v), Some(hook)) => hook(id, Outcome::Success(v)),
                (outcome, _) => outcome,
            };

            match outcome {
                Outcome::Success(v) => return Outcome::success(v).pass(),
                Outcome::Failure(e) | Outcome::Cancelled(e) => {
                    rop_core::debug!("or group: alternative {id} failed: {e}");
                    errors.push(e);
                }
            }
        }

        Outcome::failure(RopError::aggregate(errors)).pass()
    }
}
