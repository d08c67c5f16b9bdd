//! # Medi Wizard Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the Medi Wizard CLI so
//! `main.rs` can route to their handlers.
//!
//! ## Commands
//!
//! - `chat`: Interactive consultation over stdin/stdout
//! - `match`: One-shot specialist recommendation for a symptom description
//! - `specialists`: Lists the labels the active catalog can recommend
//! - `srv`: Serves a consultation as a JSON HTTP API
//!
//! Each command defines its own arguments structure and handler function.
//! Arguments shared between commands live in `options`.
//!

/// Interactive consultation REPL.
pub mod chat;
/// One-shot matching. Named `matching` because `match` is a keyword.
pub mod matching;
/// Argument groups shared by several commands (`--catalog`, `--delay-ms`).
pub mod options;
/// Lists recommendable specialists.
pub mod specialists;
/// HTTP consultation server. Includes configuration and server logic.
pub mod srv;
