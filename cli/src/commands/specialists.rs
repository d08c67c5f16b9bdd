//! # Medi Wizard Specialist Listing
//!
//! File: cli/src/commands/specialists.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `medi-wizard specialists`: prints every distinct specialist label
//! the active catalog can recommend, one per line. The fallback label is not
//! part of the catalog and is not listed.
//!
use super::options::CatalogArgs;
use crate::consult::SymptomMatcher;
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// # Specialists Command Arguments (`SpecialistsArgs`)
#[derive(Parser, Debug)]
pub struct SpecialistsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// # Handle Specialists Command (`handle_specialists`)
pub async fn handle_specialists(args: SpecialistsArgs) -> Result<()> {
    info!("Handling specialists command with args: {:?}", args);

    let config = config::load_config()?;
    let catalog = args.catalog.load(&config)?;
    for label in SymptomMatcher::new(&catalog).specialists() {
        println!("{}", label);
    }
    Ok(())
}
