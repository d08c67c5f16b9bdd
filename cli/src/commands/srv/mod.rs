//! # Medi Wizard Consultation Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `medi-wizard srv` exposes a single consultation over HTTP so a browser or
//! chat front end can drive it. The server holds one session; every client
//! talks to the same conversation.
//!
//! ## Architecture
//!
//! - `config.rs`: Arguments and the effective `ServerConfig`
//! - `server_logic.rs`: Axum router, handlers, port selection and shutdown
//!
//! ## Examples
//!
//! ```bash
//! medi-wizard srv --port 9000 --delay-ms 0
//! curl -s -X POST localhost:9000/api/message \
//!      -H 'content-type: application/json' -d '{"text":"anna"}'
//! ```
//!
use crate::consult::Wizard;
use crate::core::config as shared_config;
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Arguments and effective configuration for the server.
pub mod config;

/// Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Loads the shared configuration and catalog, then runs the server until shutdown.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let shared = shared_config::load_config()?;
    let wizard = Wizard::new(args.catalog.load(&shared)?);
    let server_config = config::ServerConfig::from_args(&args, &shared);
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(server_config, wizard).await
}
