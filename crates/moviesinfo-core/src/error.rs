//! Terminal errors returned by [`MovieInfoClient::fetch`](crate::MovieInfoClient::fetch).

use crate::retry::{FailureCause, FailureKind};
use thiserror::Error;

/// Status returned to our own callers when the dependency failed.
const DEPENDENCY_FAILURE_STATUS: u16 = 502;

/// Why a fetch did not produce a movie record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("movie info id must not be empty")]
    EmptyIdentifier,

    #[error("there is no MovieInfo available for the passed id: {id}")]
    NotFound { id: String },

    /// 4xx other than 404; `message` is the response body.
    #[error("movie info service rejected the request with HTTP {status}: {message}")]
    ClientError { status: u16, message: String },

    /// 2xx whose body is not a movie record, or an unexpected final status.
    #[error("malformed response from movie info service: {message}")]
    MalformedResponse { message: String },

    /// 5xx that the policy does not retry.
    #[error("Server Exception in MoviesInfoService (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Transport failure that the policy does not retry.
    #[error("could not reach movie info service ({kind:?}): {message}")]
    Transport { kind: FailureKind, message: String },

    #[error("movie info service still failing after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last_cause: FailureCause,
    },
}

impl FetchError {
    /// Surface a retryable cause as-is, for kinds the policy does not retry.
    pub fn from_unretried(cause: FailureCause) -> Self {
        match cause {
            FailureCause::Server { status, message } => FetchError::ServerError { status, message },
            FailureCause::Transport { kind, message } => FetchError::Transport { kind, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    /// Status code reported by the remote service, if it answered.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound { .. } => Some(404),
            FetchError::ClientError { status, .. } | FetchError::ServerError { status, .. } => {
                Some(*status)
            }
            FetchError::RetriesExhausted { last_cause, .. } => last_cause.status(),
            FetchError::EmptyIdentifier
            | FetchError::MalformedResponse { .. }
            | FetchError::Transport { .. } => None,
        }
    }

    /// Status a consuming service should answer its own caller with.
    ///
    /// A missing record is a 404; anything that means the dependency is
    /// unavailable or misbehaving is a 502.
    pub fn http_status(&self) -> u16 {
        match self {
            FetchError::NotFound { .. } => 404,
            FetchError::EmptyIdentifier => 400,
            _ => DEPENDENCY_FAILURE_STATUS,
        }
    }
}
