//! # Medi Wizard Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: Configuration loading, merging, validation, and catalog selection
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! The consultation logic itself lives in `crate::consult`; nothing here knows
//! about conversations.
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration and the catalog
//! use crate::core::error::{WizardError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
