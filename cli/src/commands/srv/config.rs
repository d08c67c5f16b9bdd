//! # Medi Wizard HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Command-line arguments for `medi-wizard srv` and the effective
//! `ServerConfig` built from them. Settings come from:
//! 1. Command-line arguments (highest priority)
//! 2. The shared configuration (`chat.reply_delay_ms`, `catalog.path`)
//! 3. Default values (lowest priority)
//!
use crate::commands::options::{CatalogArgs, DelayArgs};
use crate::core::config::Config;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// # Server Command Arguments (`SrvArgs`)
#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Sets the network port the server will listen on.
    /// The next free port is used if this one is taken.
    #[arg(long, short, default_value_t = 8000)]
    pub port: u16,

    /// Sets the network IP address the server will bind to.
    /// Use `0.0.0.0` to listen on all interfaces.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub delay: DelayArgs,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    /// Wait applied before each reply, while the session is held.
    pub reply_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            enable_cors: true,
            reply_delay: Config::default().chat.reply_delay(),
        }
    }
}

impl ServerConfig {
    pub fn from_args(args: &SrvArgs, config: &Config) -> Self {
        Self {
            port: args.port,
            host: args.host,
            enable_cors: !args.no_cors,
            reply_delay: args.delay.resolve(config),
        }
    }
}
