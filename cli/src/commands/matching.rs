//! # Medi Wizard One-Shot Matching
//!
//! File: cli/src/commands/matching.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `medi-wizard match <TEXT...>`: runs the symptom matcher once and
//! prints the recommended specialist, skipping the intake conversation.
//! Useful for checking how a catalog behaves.
//!
//! ## Examples
//!
//! ```bash
//! medi-wizard match chest pain and shortness of breath
//! # Cardiologist / Pulmonologist
//!
//! medi-wizard match --scores "stomach pain"
//! #  0  Neurologist / Ophthalmologist
//! #  1  Cardiologist / Pulmonologist
//! #  2* Urologist / General Physician
//! # ...
//! # => Urologist / General Physician
//! ```
//!
use super::options::CatalogArgs;
use crate::consult::SymptomMatcher;
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use std::fmt::Write as _;
use tracing::{debug, info};

/// # Match Command Arguments (`MatchArgs`)
#[derive(Parser, Debug)]
pub struct MatchArgs {
    /// Symptom description. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Also print every catalog entry's keyword hit count.
    #[arg(long)]
    pub scores: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// # Handle Match Command (`handle_match`)
pub async fn handle_match(args: MatchArgs) -> Result<()> {
    info!("Handling match command with args: {:?}", args);

    let config = config::load_config()?;
    let catalog = args.catalog.load(&config)?;
    let matcher = SymptomMatcher::new(&catalog);
    let text = args.text.join(" ");

    print!("{}", report(&matcher, &text, args.scores));
    Ok(())
}

/// Builds the command's output. Qualifying entries are marked with `*`.
fn report(matcher: &SymptomMatcher<'_>, text: &str, with_scores: bool) -> String {
    let mut out = String::new();
    let label = matcher.recommend(text);
    debug!("Recommendation for {:?}: {}", text, label);

    if with_scores {
        for score in matcher.scores(text) {
            let marker = if score.qualifies() { "*" } else { " " };
            let _ = writeln!(out, "{:>3}{} {}", score.hits, marker, score.entry.specialist);
        }
        let _ = writeln!(out, "=> {}", label);
    } else {
        let _ = writeln!(out, "{}", label);
    }
    out
}
