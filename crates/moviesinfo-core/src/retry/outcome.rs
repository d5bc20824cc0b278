//! Tagged result of one attempt.

use super::error::FailureCause;
use crate::error::FetchError;

/// Outcome of a single attempt, produced by classification before any retry
/// decision is made.
#[derive(Debug)]
pub enum AttemptOutcome<T> {
    Success(T),
    /// May be retried, depending on the policy and remaining budget.
    Retryable(FailureCause),
    /// Ends the fetch immediately.
    Terminal(FetchError),
}
