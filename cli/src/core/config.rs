//! # Medi Wizard Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates Medi Wizard's configuration. It
//! supports a multi-level approach combining defaults, user settings and
//! project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.medi-wizard.toml` in current directory or ancestors
//! 2. User-specific config file: `$MEDI_WIZARD_CONFIG` if set, otherwise
//!    `<config dir>/medi-wizard/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! reply_delay_ms = 250
//!
//! [catalog]
//! path = "~/medical/catalog.toml"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let catalog = config::load_catalog(&cfg, None)?;
//! let delay = cfg.chat.reply_delay();
//! ```
//!
use crate::consult::Catalog;
use crate::core::error::{Result, WizardError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Environment variable pointing at an explicit user configuration file.
pub const CONFIG_ENV_VAR: &str = "MEDI_WIZARD_CONFIG";

const PROJECT_CONFIG_FILENAME: &str = ".medi-wizard.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for conversational front ends (`chat`, `srv`).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Simulated "thinking" time before each reply, in milliseconds.
    /// Unset means the file does not override it.
    #[serde(default)]
    pub reply_delay_ms: Option<u64>,
}

impl ChatConfig {
    /// The configured delay, or `DEFAULT_REPLY_DELAY_MS` when no file set one.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms.unwrap_or(DEFAULT_REPLY_DELAY_MS))
    }
}

/// Where the specialist catalog comes from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog TOML file (can use ~). The built-in catalog is used when unset.
    pub path: Option<String>,
}

/// Reply delay used when no configuration file sets `chat.reply_delay_ms`.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

/// Picks the catalog: an explicit path first, then the configured one, then the built-in table.
pub fn load_catalog(config: &Config, override_path: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = override_path {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        return Catalog::load(&expanded);
    }
    match &config.catalog.path {
        Some(path) => Catalog::load(Path::new(path)),
        None => {
            debug!("Using built-in specialist catalog.");
            Ok(Catalog::builtin())
        }
    }
}

fn load_user_config() -> Result<Option<Config>> {
    if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(shellexpand::tilde(&explicit).into_owned());
        info!(
            "Loading user configuration from ${}: {}",
            CONFIG_ENV_VAR,
            path.display()
        );
        return load_config_from_path(&path).map(Some);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "MediWizard", "medi-wizard") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    find_project_config_from(&current_dir)
}

fn find_project_config_from(start: &Path) -> Result<Option<PathBuf>> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.chat.reply_delay_ms = project_cfg.chat.reply_delay_ms.or(user.chat.reply_delay_ms);
    merged.catalog.path = project_cfg.catalog.path.or(user.catalog.path);
    merged
}

fn expand_config_paths(config: &mut Config) {
    if let Some(path) = config.catalog.path.as_mut() {
        *path = shellexpand::tilde(path.as_str()).into_owned();
        debug!("Expanded catalog path: {}", path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(path) = &config.catalog.path {
        let catalog_path = PathBuf::from(path);
        if !catalog_path.exists() {
            return Err(anyhow!(WizardError::Config(format!(
                "Configured catalog file '{}' does not exist.",
                catalog_path.display()
            ))));
        }
        if !catalog_path.is_file() {
            return Err(anyhow!(WizardError::Config(format!(
                "Configured catalog path '{}' exists but is not a file.",
                catalog_path.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
