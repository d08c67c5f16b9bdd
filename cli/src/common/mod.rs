//! # Medi Wizard Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers used by more than one command but not part of the
//! consultation core. Keeps presentation concerns out of `consult::` and
//! infrastructure concerns in `core::`.
//!
//! - **`ui`**: Rendering of reply markup for the terminal.
//!

/// Terminal rendering of reply markup.
pub mod ui;
