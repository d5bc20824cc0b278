use crate::client::Timeouts;
use crate::retry::{FailureKind, RetryOn, RetryPolicy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per fetch (including the first).
    pub max_attempts: u32,
    /// Fixed delay between attempts, in milliseconds.
    pub retry_delay_ms: u64,
    /// Failure kinds to retry; all of them when missing.
    #[serde(default)]
    pub retry_on: Option<Vec<FailureKind>>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay_ms: 1000,
            retry_on: None,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        let retry_on = cfg
            .retry_on
            .as_deref()
            .map(RetryOn::from_kinds)
            .unwrap_or_default();
        RetryPolicy::fixed(cfg.max_attempts, Duration::from_millis(cfg.retry_delay_ms))
            .with_retry_on(retry_on)
    }
}

/// Global configuration loaded from `~/.config/moviesinfo/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviesConfig {
    /// Base URL of the movie info resource; records live at `<url>/{id}`.
    pub movies_info_url: String,
    /// Connect timeout per attempt, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout per attempt, in seconds.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self {
            movies_info_url: "http://localhost:8080/v1/movieinfos".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
            retry: None,
        }
    }
}

impl MoviesConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryPolicy::from)
            .unwrap_or_default()
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.connect_timeout_secs),
            request: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Reject values that would make every fetch fail or never time out.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.movies_info_url)
            .with_context(|| format!("movies_info_url is not a URL: {}", self.movies_info_url))?;
        anyhow::ensure!(
            matches!(url.scheme(), "http" | "https"),
            "movies_info_url must be http(s): {}",
            self.movies_info_url
        );
        anyhow::ensure!(self.connect_timeout_secs > 0, "connect_timeout_secs must be > 0");
        anyhow::ensure!(self.request_timeout_secs > 0, "request_timeout_secs must be > 0");
        if let Some(retry) = &self.retry {
            anyhow::ensure!(retry.max_attempts > 0, "retry.max_attempts must be > 0");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("moviesinfo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MoviesConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MoviesConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<MoviesConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: MoviesConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
