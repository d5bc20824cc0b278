//! Resilient client for the movie info service.
//!
//! Each attempt is one blocking curl GET on the tokio blocking pool, turned
//! into an [`AttemptOutcome`] by `response::interpret` (or by classifying
//! the curl error). The retry loop only sees those outcomes.

mod response;
mod transport;

use crate::config::MoviesConfig;
use crate::error::FetchError;
use crate::movie_info::MovieInfo;
use crate::retry::{
    is_permanent_curl_error, run_with_retry, AttemptOutcome, FailureCause, FailureKind,
    RetryPolicy,
};
use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Per-attempt transport limits. Independent of the retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    /// Whole request, connect included. A timed-out attempt counts as one
    /// retryable failure.
    pub request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(10),
        }
    }
}

/// Fetches single movie records from `GET <base-url>/{id}`.
///
/// Cheap to clone and safe to share; concurrent fetches share nothing but the
/// read-only policy and URL.
#[derive(Debug, Clone)]
pub struct MovieInfoClient {
    base_url: Url,
    policy: RetryPolicy,
    timeouts: Timeouts,
}

impl MovieInfoClient {
    pub fn new(base_url: &str, policy: RetryPolicy, timeouts: Timeouts) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid base URL: {base_url}"))?;
        anyhow::ensure!(
            matches!(base_url.scheme(), "http" | "https") && !base_url.cannot_be_a_base(),
            "base URL must be http(s): {}",
            base_url
        );
        Ok(Self {
            base_url,
            policy,
            timeouts,
        })
    }

    pub fn from_config(cfg: &MoviesConfig) -> Result<Self> {
        cfg.validate()?;
        Self::new(&cfg.movies_info_url, cfg.retry_policy(), cfg.timeouts())
    }

    /// `<base-url>/{id}` with `id` as a single percent-encoded path segment.
    pub fn movie_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        // Never fails: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    /// Fetch one movie record, retrying transient failures per the policy.
    ///
    /// Returns after 1..=`max_attempts` HTTP round trips with either the
    /// decoded record or exactly one terminal [`FetchError`]. Only the empty
    /// string is rejected locally; any other id goes to the service as is.
    pub async fn fetch(&self, id: &str) -> Result<MovieInfo, FetchError> {
        if id.is_empty() {
            return Err(FetchError::EmptyIdentifier);
        }
        let url = self.movie_url(id);

        let result =
            run_with_retry(&self.policy, |attempt| self.attempt(id, url.clone(), attempt)).await;

        match &result {
            Ok(movie) => tracing::info!(id, name = %movie.name, "movie info fetched"),
            Err(e) => tracing::warn!(
                id,
                status = e.http_status(),
                "movie info fetch failed: {}",
                e
            ),
        }
        result
    }

    async fn attempt(&self, id: &str, url: Url, attempt: u32) -> AttemptOutcome<MovieInfo> {
        tracing::debug!(
            id,
            attempt,
            max_attempts = self.policy.max_attempts,
            %url,
            "GET movie info"
        );
        let timeouts = self.timeouts;
        let joined =
            tokio::task::spawn_blocking(move || transport::get(url.as_str(), &timeouts)).await;
        match joined {
            Ok(Ok(raw)) => {
                tracing::debug!(id, attempt, status = raw.status, "movie info response");
                response::interpret(id, raw)
            }
            Ok(Err(e)) if is_permanent_curl_error(&e) => {
                AttemptOutcome::Terminal(FetchError::Transport {
                    kind: FailureKind::Transport,
                    message: e.to_string(),
                })
            }
            Ok(Err(e)) => AttemptOutcome::Retryable(FailureCause::from_curl(&e)),
            Err(e) => AttemptOutcome::Terminal(FetchError::Transport {
                kind: FailureKind::Transport,
                message: format!("request task failed: {e}"),
            }),
        }
    }
}
