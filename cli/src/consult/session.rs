//! # Consultation Session State
//!
//! File: cli/src/consult/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything one consultation remembers between turns:
//! - `Stage`: which answer the wizard is waiting for.
//! - `UserProfile`: the intake answers collected so far.
//! - the symptom log: every symptom description given in this consultation.
//!
//! A `Session` is a plain value. The wizard takes it in, returns the next one,
//! and never keeps a copy of its own.
//!
use super::intake::Gender;
use serde::Serialize;

/// Which answer the wizard expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Name,
    Age,
    Gender,
    Symptoms,
    AdditionalSymptoms,
}

impl Stage {
    /// Whether answers in this stage are symptom descriptions.
    pub fn collects_symptoms(self) -> bool {
        matches!(self, Stage::Symptoms | Stage::AdditionalSymptoms)
    }

    /// Placeholder text a front end can show in its input box.
    pub fn input_hint(self) -> &'static str {
        match self {
            Stage::Name => "Enter your name...",
            Stage::Age => "Enter your age...",
            Stage::Gender => "Enter your gender (Male/Female)...",
            Stage::Symptoms => "Describe your symptoms in detail...",
            Stage::AdditionalSymptoms => {
                "Tell me about additional symptoms or type 'new' for fresh consultation..."
            }
        }
    }
}

/// Intake answers. Each field is set once and cleared only by a reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub(super) name: Option<String>,
    pub(super) age: Option<String>,
    pub(super) gender: Option<Gender>,
}

impl UserProfile {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<&str> {
        self.age.as_deref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}

/// The full state of one consultation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub(super) stage: Stage,
    pub(super) profile: UserProfile,
    pub(super) symptoms: Vec<String>,
}

impl Session {
    /// A fresh consultation waiting for the user's name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Symptom descriptions in the order they were given.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// The symptom log as the single text the matcher sees.
    pub fn combined_symptoms(&self) -> String {
        self.symptoms.join(". ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_blank() {
        let session = Session::new();
        assert_eq!(session.stage(), Stage::Name);
        assert!(session.profile().is_empty());
        assert!(session.symptoms().is_empty());
        assert_eq!(session.combined_symptoms(), "");
    }

    #[test]
    fn test_combined_symptoms_joins_with_period() {
        let session = Session {
            symptoms: vec!["headache".into(), "blurry vision".into()],
            ..Session::default()
        };
        assert_eq!(session.combined_symptoms(), "headache. blurry vision");
    }

    #[test]
    fn test_symptom_stages() {
        assert!(!Stage::Name.collects_symptoms());
        assert!(!Stage::Age.collects_symptoms());
        assert!(!Stage::Gender.collects_symptoms());
        assert!(Stage::Symptoms.collects_symptoms());
        assert!(Stage::AdditionalSymptoms.collects_symptoms());
    }

    #[test]
    fn test_input_hints_are_distinct() {
        let stages = [
            Stage::Name,
            Stage::Age,
            Stage::Gender,
            Stage::Symptoms,
            Stage::AdditionalSymptoms,
        ];
        for (i, a) in stages.iter().enumerate() {
            for b in &stages[i + 1..] {
                assert_ne!(a.input_hint(), b.input_hint());
            }
        }
    }
}
