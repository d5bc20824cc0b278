//! Retry policy and the attempt loop.
//!
//! Classification (HTTP status, curl errors) is kept separate from the retry
//! decision: every attempt first becomes an [`AttemptOutcome`], and only the
//! `Retryable` arm ever reaches [`RetryPolicy::decide`].

mod classify;
mod error;
mod outcome;
mod policy;
mod run;

pub use classify::{
    classify_curl_error, classify_http_status, is_permanent_curl_error, StatusClass,
};
pub use error::FailureCause;
pub use outcome::AttemptOutcome;
pub use policy::{FailureKind, RetryDecision, RetryOn, RetryPolicy};
pub use run::run_with_retry;
