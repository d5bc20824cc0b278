//! CLI for the movie info client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use moviesinfo_core::config;

use commands::{run_config, run_get, GetOverrides};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "movies")]
#[command(about = "Fetch movie records from the movie info service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one movie record by ID and print it as JSON.
    Get {
        /// Movie info identifier.
        id: String,
        /// Base URL of the movie info resource (overrides config).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Total attempts including the first (overrides config).
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,
        /// Fixed delay between attempts in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        retry_delay_ms: Option<u64>,
        /// Per-attempt request timeout in seconds (overrides config).
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                id,
                base_url,
                max_attempts,
                retry_delay_ms,
                timeout_secs,
            } => {
                let overrides = GetOverrides {
                    base_url,
                    max_attempts,
                    retry_delay_ms,
                    timeout_secs,
                };
                run_get(&cfg, &id, &overrides).await?
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
