//! `movies config` – show where the config lives and what is in effect.

use anyhow::Result;
use moviesinfo_core::config::{self, MoviesConfig};

pub fn run_config(cfg: &MoviesConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    let policy = cfg.retry_policy();
    println!(
        "# effective retry: {} attempts, {} ms apart, on {:?}",
        policy.max_attempts,
        policy.delay.as_millis(),
        policy.retry_on.kinds()
    );
    Ok(())
}
