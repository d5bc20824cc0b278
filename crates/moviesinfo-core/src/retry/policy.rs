use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What went wrong in a retryable attempt. This is the only input the retry
/// predicate looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Attempt exceeded its connect or request timeout.
    Timeout,
    /// Connection refused/reset, DNS failure, nothing received.
    Connection,
    /// Any other transport failure that produced no HTTP response.
    Transport,
    /// Remote answered with a 5xx status.
    ServerError,
}

impl FailureKind {
    pub const ALL: [FailureKind; 4] = [
        FailureKind::Timeout,
        FailureKind::Connection,
        FailureKind::Transport,
        FailureKind::ServerError,
    ];
}

/// Set of failure kinds the policy retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOn {
    pub timeout: bool,
    pub connection: bool,
    pub transport: bool,
    pub server_error: bool,
}

impl RetryOn {
    pub const fn all() -> Self {
        Self {
            timeout: true,
            connection: true,
            transport: true,
            server_error: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            timeout: false,
            connection: false,
            transport: false,
            server_error: false,
        }
    }

    pub fn from_kinds(kinds: &[FailureKind]) -> Self {
        kinds.iter().fold(Self::none(), |mut on, kind| {
            match kind {
                FailureKind::Timeout => on.timeout = true,
                FailureKind::Connection => on.connection = true,
                FailureKind::Transport => on.transport = true,
                FailureKind::ServerError => on.server_error = true,
            }
            on
        })
    }

    pub fn contains(&self, kind: FailureKind) -> bool {
        match kind {
            FailureKind::Timeout => self.timeout,
            FailureKind::Connection => self.connection,
            FailureKind::Transport => self.transport,
            FailureKind::ServerError => self.server_error,
        }
    }

    /// Kinds in this set, in declaration order.
    pub fn kinds(&self) -> Vec<FailureKind> {
        FailureKind::ALL
            .into_iter()
            .filter(|k| self.contains(*k))
            .collect()
    }
}

impl Default for RetryOn {
    fn default() -> Self {
        Self::all()
    }
}

/// Decision returned by the retry policy for one retryable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Try again after the given delay.
    RetryAfter(Duration),
    /// The attempt budget is used up.
    Exhausted,
    /// The policy does not retry this kind of failure.
    NotRetryable,
}

/// Fixed-delay retry policy.
///
/// Built once from configuration and shared read-only by every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Delay between consecutive attempts.
    pub delay: Duration,
    /// Failure kinds that are retried.
    pub retry_on: RetryOn,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
            retry_on: RetryOn::all(),
        }
    }
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
            retry_on: RetryOn::all(),
        }
    }

    pub fn with_retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    /// Pure predicate: does this policy retry failures of `kind` at all?
    pub fn is_retryable(&self, kind: FailureKind) -> bool {
        self.retry_on.contains(kind)
    }

    /// Decide what to do after attempt number `attempt` (1-based) failed with
    /// a retryable failure of `kind`.
    ///
    /// A `max_attempts` of 0 behaves like 1: the first attempt always runs.
    pub fn decide(&self, attempt: u32, kind: FailureKind) -> RetryDecision {
        if !self.is_retryable(kind) {
            return RetryDecision::NotRetryable;
        }
        if attempt >= self.max_attempts {
            return RetryDecision::Exhausted;
        }
        RetryDecision::RetryAfter(self.delay)
    }
}
