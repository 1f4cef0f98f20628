//! Storefront configuration loaded from `storefront.toml`.
//!
//! Missing keys fall back to defaults. `STOREFRONT_LOG` overrides `log_filter`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "storefront.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorefrontConfig {
    /// Mailbox capacity of each resource actor.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// A reservation leaving this many units or fewer logs a low-stock warning.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_channel_buffer() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_low_stock_threshold() -> u32 {
    5
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
            log_filter: default_log_filter(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl StorefrontConfig {
    /// Loads the configuration at `path`, using defaults if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<StorefrontConfig>(&contents)
                .with_context(|| format!("parsing {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(filter) = std::env::var("STOREFRONT_LOG") {
            if !filter.is_empty() {
                config.log_filter = filter;
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        // tokio::sync::mpsc::channel panics on a zero capacity
        anyhow::ensure!(self.channel_buffer > 0, "channel_buffer must be at least 1");
        Ok(())
    }
}
