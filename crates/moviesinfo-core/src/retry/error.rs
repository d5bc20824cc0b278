//! Cause of a retryable attempt failure.

use super::classify::classify_curl_error;
use super::policy::FailureKind;
use thiserror::Error;

/// Why a single attempt failed in a way that may go away on its own.
///
/// Kept as owned strings so the last cause can be handed back to the caller
/// inside `FetchError::RetriesExhausted`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// No HTTP response: curl failed (timeout, refused connection, DNS, ...).
    #[error("{kind:?}: {message}")]
    Transport { kind: FailureKind, message: String },
    /// Remote answered with a 5xx; `message` is the response body.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },
}

impl FailureCause {
    pub fn from_curl(e: &curl::Error) -> Self {
        FailureCause::Transport {
            kind: classify_curl_error(e),
            message: e.to_string(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FailureCause::Transport { kind, .. } => *kind,
            FailureCause::Server { .. } => FailureKind::ServerError,
        }
    }

    /// HTTP status, when the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FailureCause::Transport { .. } => None,
            FailureCause::Server { status, .. } => Some(*status),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FailureCause::Transport { message, .. } | FailureCause::Server { message, .. } => {
                message
            }
        }
    }
}
