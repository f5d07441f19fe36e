//! Bounded retry with a fixed delay between attempts.
//!
//! Independent of any I/O primitive: the operation is any closure returning a future. The
//! connection manager uses it for startup connection and for reconnecting a dead pool.

use std::{future::Future, time::Duration};
use thiserror::Error;

/// How many times to try an operation and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Pause between a failed attempt and the next one. No pause follows the last attempt.
    pub delay: Duration,
}

/// Terminal failure of a retried operation.
#[derive(Error, Debug)]
#[error("Operation failed after {attempts} attempt(s): {last}")]
pub struct RetryError<E> {
    /// Number of attempts made.
    pub attempts: u32,
    /// Error returned by the final attempt.
    #[source]
    pub last: E,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Runs `op` until it succeeds or the attempt budget is spent.
    ///
    /// `op` receives the 1-based attempt number. Each failure except the last is logged at
    /// warn level before sleeping.
    ///
    /// # Returns
    /// - `Ok(T)` - Result of the first successful attempt
    /// - `Err(RetryError)` - Every attempt failed; carries the last error
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= max_attempts => {
                    return Err(RetryError {
                        attempts: attempt,
                        last: err,
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        "Attempt {}/{} failed, retrying in {:?}: {}",
                        attempt,
                        max_attempts,
                        self.delay,
                        err
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
