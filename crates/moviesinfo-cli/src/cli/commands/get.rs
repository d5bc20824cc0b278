//! `movies get <id>` – fetch one movie record.

use anyhow::Result;
use moviesinfo_core::config::{MoviesConfig, RetryConfig};
use moviesinfo_core::MovieInfoClient;

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOverrides {
    pub base_url: Option<String>,
    pub max_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
}

impl GetOverrides {
    pub fn apply(&self, cfg: &mut MoviesConfig) {
        if let Some(url) = &self.base_url {
            cfg.movies_info_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            cfg.request_timeout_secs = secs;
        }
        if self.max_attempts.is_some() || self.retry_delay_ms.is_some() {
            let retry = cfg.retry.get_or_insert_with(RetryConfig::default);
            if let Some(n) = self.max_attempts {
                retry.max_attempts = n;
            }
            if let Some(ms) = self.retry_delay_ms {
                retry.retry_delay_ms = ms;
            }
        }
    }
}

pub async fn run_get(cfg: &MoviesConfig, id: &str, overrides: &GetOverrides) -> Result<()> {
    let mut cfg = cfg.clone();
    overrides.apply(&mut cfg);
    let client = MovieInfoClient::from_config(&cfg)?;

    match client.fetch(id).await {
        Ok(movie) => {
            println!("{}", serde_json::to_string_pretty(&movie)?);
            Ok(())
        }
        Err(e) => {
            let status = e.http_status();
            Err(anyhow::Error::new(e).context(format!("fetching movie info {id} (HTTP {status})")))
        }
    }
}
