//! # Medi Wizard Consultation Core
//!
//! File: cli/src/consult/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The front-end-independent heart of Medi Wizard: a scripted intake (name,
//! age, gender) followed by open symptom collection, where every symptom
//! message is matched against a specialist catalog.
//!
//! ## Architecture
//!
//! - `catalog`: The ordered table of symptom profiles and specialist labels.
//! - `matcher`: Keyword-overlap scoring of free text against the catalog.
//! - `intake`: Parsing and validation of the name, age and gender answers.
//! - `session`: The per-consultation state value (stage, profile, symptom log).
//! - `replies`: Message templates.
//! - `conversation`: The `Wizard` state machine tying the above together.
//!
//! Nothing in this module does I/O or keeps hidden state. Front ends (the
//! terminal REPL, the HTTP endpoint) own the `Session` and pass it back in on
//! every turn.
//!
//! ## Usage
//!
//! ```rust
//! use crate::consult::{Session, Wizard};
//!
//! let wizard = Wizard::default();
//! let (session, reply) = wizard.respond(Session::new(), "my name is anna");
//! assert_eq!(reply, "Nice to meet you, Anna! Could you please tell me your age?");
//! ```
//!
pub mod catalog;
pub mod conversation;
pub mod intake;
pub mod matcher;
pub mod replies;
pub mod session;

pub use catalog::Catalog;
pub use conversation::Wizard;
pub use matcher::SymptomMatcher;
pub use session::{Session, Stage};
