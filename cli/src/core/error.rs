//! # Medi Wizard Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used outside the consultation core.
//! The core itself never fails: malformed answers are handled by re-prompting.
//! Errors only arise at the edges, when configuration or a catalog file is
//! loaded, or when a front end (terminal, HTTP) hits an I/O problem.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `WizardError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! if catalog.entries().is_empty() {
//!     return Err(WizardError::EmptyCatalog)?;
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Medi Wizard application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Specialist catalog is empty; at least one entry is required.")]
    EmptyCatalog,

    #[error("Catalog entry #{index} ('{specialist}') has no keywords.")]
    MissingKeywords { index: usize, specialist: String },

    #[error("Catalog entry #{index} has an empty specialist label.")]
    MissingSpecialist { index: usize },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
