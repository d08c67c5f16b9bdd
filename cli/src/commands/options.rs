//! # Shared Command Options
//!
//! File: cli/src/commands/options.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Argument groups reused by several subcommands, flattened into each
//! command's own `Args` struct with `#[command(flatten)]`:
//!
//! - `CatalogArgs`: `--catalog <PATH>` to swap in a different specialist catalog.
//! - `DelayArgs`: `--delay-ms <MS>` to override the configured reply delay.
//!
use crate::consult::Catalog;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use clap::Args;
use std::{path::PathBuf, time::Duration};

/// Selects the specialist catalog.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog TOML file to use instead of the configured or built-in catalog.
    #[arg(long, value_name = "PATH", env = "MEDI_WIZARD_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self, config: &Config) -> Result<Catalog> {
        config::load_catalog(config, self.catalog.as_deref())
    }
}

/// Overrides the simulated "thinking" delay before each reply.
#[derive(Args, Debug, Clone, Default)]
pub struct DelayArgs {
    /// Milliseconds to wait before each reply (defaults to `chat.reply_delay_ms`).
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

impl DelayArgs {
    pub fn resolve(&self, config: &Config) -> Duration {
        self.delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.chat.reply_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ChatConfig;

    #[test]
    fn test_delay_override_wins() {
        let config = Config {
            chat: ChatConfig {
                reply_delay_ms: Some(900),
            },
            ..Default::default()
        };
        let args = DelayArgs { delay_ms: Some(0) };
        assert_eq!(args.resolve(&config), Duration::ZERO);
        assert_eq!(
            DelayArgs::default().resolve(&config),
            Duration::from_millis(900)
        );
    }

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let catalog = CatalogArgs::default().load(&Config::default()).unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }
}
