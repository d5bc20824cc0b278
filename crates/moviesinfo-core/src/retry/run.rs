//! Retry loop: run attempts until success, a terminal failure, or the policy
//! says stop.

use super::outcome::AttemptOutcome;
use super::policy::{RetryDecision, RetryPolicy};
use crate::error::FetchError;
use std::future::Future;

/// Runs `attempt_fn` (called with the 1-based attempt number) until it
/// succeeds or fails terminally. Retryable failures sleep for the policy
/// delay and try again; attempts never overlap.
///
/// Dropping the returned future cancels it, including a pending delay: no
/// further attempt is started.
pub async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    mut attempt_fn: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AttemptOutcome<T>>,
{
    let mut attempt = 1u32;
    loop {
        let cause = match attempt_fn(attempt).await {
            AttemptOutcome::Success(value) => return Ok(value),
            AttemptOutcome::Terminal(e) => return Err(e),
            AttemptOutcome::Retryable(cause) => cause,
        };
        match policy.decide(attempt, cause.kind()) {
            RetryDecision::NotRetryable => {
                tracing::debug!(
                    attempt,
                    kind = ?cause.kind(),
                    "failure kind not retried by policy"
                );
                return Err(FetchError::from_unretried(cause));
            }
            RetryDecision::Exhausted => {
                return Err(FetchError::RetriesExhausted {
                    attempts: attempt,
                    last_cause: cause,
                });
            }
            RetryDecision::RetryAfter(delay) => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "attempt failed, retrying: {}",
                    cause
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
