//! Server settings from command-line flags, falling back to env vars.
//!
//! Usage:
//!   catiq-server --bind 0.0.0.0:8001 --seed 12345 --config catiq.json
//!
//! Env fallbacks: CATIQ_BIND, CATIQ_SEED, CATIQ_CONFIG.

use anyhow::{Context, Result};
use catiq_core::config::PipelineConfig;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: String,
    pub seed: Option<u64>,
    pub config_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Flags win over env vars; env vars win over defaults.
    pub fn from_args_and_env(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let bind = flag(args, "--bind")
            .or_else(|| env("CATIQ_BIND"))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let seed = match flag(args, "--seed").or_else(|| env("CATIQ_SEED")) {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("Invalid seed '{raw}'"))?,
            ),
            None => None,
        };

        let config_path = flag(args, "--config")
            .or_else(|| env("CATIQ_CONFIG"))
            .map(PathBuf::from);

        Ok(Self { bind, seed, config_path })
    }

    /// The pipeline config file if one was given, else defaults. A seed
    /// from flags or env overrides the file's seed.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config_path {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn flag(args: &[String], name: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].clone())
}
