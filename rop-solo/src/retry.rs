// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Retry policies and the retrying variant of [`try_map`](crate::try_map).
//!
//! A strategy answers two questions: how many attempts are allowed, and how
//! long to wait after the n-th failed attempt. It is always passed explicitly.

use rop_core::{Outcome, RopError};
use std::error::Error;
use std::time::Duration;

/// Default growth factor of [`ExponentialRetryStrategy`].
pub const DEFAULT_EXPONENTIAL_FACTOR: f64 = 2.0;

/// How often to retry and how long to wait in between.
pub trait RetryStrategy: Send + Sync {
    /// Total number of attempts, the first call included.
    fn attempts(&self) -> u64;

    /// Delay after the `attempt`-th failure (1-based).
    fn wait(&self, attempt: u64) -> Duration;
}

/// Same delay after every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRetryStrategy {
    attempts: u64,
    delay: Duration,
}

impl FixedRetryStrategy {
    pub const fn new(attempts: u64, delay: Duration) -> Self {
        Self { attempts, delay }
    }
}

impl RetryStrategy for FixedRetryStrategy {
    fn attempts(&self) -> u64 {
        self.attempts
    }

    fn wait(&self, _attempt: u64) -> Duration {
        self.delay
    }
}

/// `delay * attempt`, with `attempt` capped at `attempts` and the result
/// capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearRetryStrategy {
    attempts: u64,
    delay: Duration,
    max_delay: Option<Duration>,
}

impl LinearRetryStrategy {
    pub const fn new(attempts: u64, delay: Duration, max_delay: Option<Duration>) -> Self {
        Self {
            attempts,
            delay,
            max_delay,
        }
    }
}

impl RetryStrategy for LinearRetryStrategy {
    fn attempts(&self) -> u64 {
        self.attempts
    }

    fn wait(&self, attempt: u64) -> Duration {
        let attempt = attempt.min(self.attempts);
        let factor = u32::try_from(attempt).unwrap_or(u32::MAX);
        cap(self.delay.saturating_mul(factor), self.max_delay)
    }
}

/// `delay * trunc(factor ^ attempt)`, with `attempt` capped at `attempts` and
/// the result capped at `max_delay`.
///
/// Overflow saturates at [`Duration::MAX`] before the cap is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialRetryStrategy {
    attempts: u64,
    factor: f64,
    delay: Duration,
    max_delay: Option<Duration>,
}

impl ExponentialRetryStrategy {
    pub const fn new(
        attempts: u64,
        factor: f64,
        delay: Duration,
        max_delay: Option<Duration>,
    ) -> Self {
        Self {
            attempts,
            factor,
            delay,
            max_delay,
        }
    }

    /// Doubling strategy ([`DEFAULT_EXPONENTIAL_FACTOR`]).
    pub const fn doubling(attempts: u64, delay: Duration, max_delay: Option<Duration>) -> Self {
        Self::new(attempts, DEFAULT_EXPONENTIAL_FACTOR, delay, max_delay)
    }
}

impl RetryStrategy for ExponentialRetryStrategy {
    fn attempts(&self) -> u64 {
        self.attempts
    }

    fn wait(&self, attempt: u64) -> Duration {
        let attempt = attempt.min(self.attempts);
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        // float -> int casts saturate; NaN and negatives become zero
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let multiplier = self.factor.powi(exponent).trunc() as u64;
        let nanos = self.delay.as_nanos().saturating_mul(u128::from(multiplier));
        cap(duration_from_nanos(nanos), self.max_delay)
    }
}

fn cap(delay: Duration, max_delay: Option<Duration>) -> Duration {
    match max_delay {
        Some(max) if delay >= max => max,
        _ => delay,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    match u64::try_from(nanos / NANOS_PER_SEC) {
        Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}

/// Call `f` on the value of a successful outcome until it succeeds or the
/// strategy runs out of attempts, sleeping the current thread in between.
///
/// The error of the last attempt surfaces as `Failure`. Non-success inputs
/// pass through and `f` is never called.
///
/// # Example
///
/// ```
/// use rop_core::Outcome;
/// use rop_solo::{try_with_retry, FixedRetryStrategy};
/// use std::time::Duration;
///
/// let strategy = FixedRetryStrategy::new(3, Duration::ZERO);
/// let mut calls = 0;
///
/// let result = try_with_retry(Outcome::success(20), &strategy, |v: &i32| {
///     calls += 1;
///     if calls < 3 {
///         Err(std::io::Error::other("busy"))
///     } else {
///         Ok(v + 1)
///     }
/// });
///
/// assert_eq!(result, Outcome::success(21));
/// assert_eq!(calls, 3);
/// ```
pub fn try_with_retry<T, U, E, S, F>(input: Outcome<T>, strategy: &S, mut f: F) -> Outcome<U>
where
    S: RetryStrategy + ?Sized,
    F: FnMut(&T) -> Result<U, E>,
    E: Error + Send + Sync + 'static,
{
    let value = match input.railway() {
        Ok(value) => value,
        Err(retagged) => return retagged,
    };

    let mut attempt = 0_u64;
    loop {
        match f(&value) {
            Ok(out) => return Outcome::success(out),
            Err(e) => {
                attempt += 1;
                if attempt >= strategy.attempts() {
                    return Outcome::failure(RopError::user(e));
                }
                let delay = strategy.wait(attempt);
                rop_core::debug!("retry: attempt {attempt} failed, waiting {delay:?}");
                std::thread::sleep(delay);
            }
        }
    }
}

/// Async form of [`try_with_retry`]: waits with the runtime timer instead of
/// blocking the thread.
pub async fn try_with_retry_async<T, U, E, S, F>(
    input: Outcome<T>,
    strategy: &S,
    mut f: F,
) -> Outcome<U>
where
    S: RetryStrategy + ?Sized,
    F: FnMut(&T) -> Result<U, E>,
    E: Error + Send + Sync + 'static,
{
    let value = match input.railway() {
        Ok(value) => value,
        Err(retagged) => return retagged,
    };

    let mut attempt = 0_u64;
    loop {
        match f(&value) {
            Ok(out) => return Outcome::success(out),
            Err(e) => {
                attempt += 1;
                if attempt >= strategy.attempts() {
                    return Outcome::failure(RopError::user(e));
                }
                let delay = strategy.wait(attempt);
                rop_core::debug!("retry: attempt {attempt} failed, waiting {delay:?}");
                rop_core::sleep(delay).await;
            }
        }
    }
}
