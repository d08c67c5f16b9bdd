//! # Medi Wizard Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Medi Wizard CLI, a symptom
//! intake assistant that collects a name, age and gender, then recommends a
//! medical specialist from a symptom description.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - `consult`: The conversation engine (session, intake parsing, matcher, replies)
//! - `commands`: One module per subcommand, each with an args struct and a handler
//! - `core`: Configuration loading and error types
//! - `common`: Terminal rendering helpers
//!
//! All errors are propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! ```bash
//! # Start a consultation
//! medi-wizard chat
//!
//! # Ask for a recommendation directly, with debug logging
//! medi-wizard -vv match "persistent knee pain every morning"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand arguments and handlers
mod common; // Terminal rendering
mod consult; // Conversation engine
mod core; // Errors and configuration

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "medi-wizard",
    about = "🩺 Medi Wizard: symptom intake and specialist recommendation",
    long_about = "Collects basic details, listens to your symptoms and suggests which kind of \
                  medical specialist to see.\n\
                  This is not a substitute for professional medical advice.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive consultation.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Recommend a specialist for a symptom description.
    #[command(name = "match", alias = "m")]
    Match(commands::matching::MatchArgs),
    /// List the specialists the catalog can recommend.
    Specialists(commands::specialists::SpecialistsArgs),
    /// Serve a consultation over HTTP.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Match(args) => commands::matching::handle_match(args).await,
        Commands::Specialists(args) => commands::specialists::handle_specialists(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
