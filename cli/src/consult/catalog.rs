//! # Specialist Catalog
//!
//! File: cli/src/consult/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The catalog is the ordered table of symptom profiles the matcher scores
//! against. Each entry pairs a human-readable description with a specialist
//! label and a list of lowercase keywords.
//!
//! Entry order matters: when two entries score the same, the one listed first
//! wins. The built-in table must therefore keep its order exactly.
//!
//! A replacement catalog can be loaded from TOML:
//!
//! ```toml
//! [[entries]]
//! description = "Frequent headaches and blurry vision"
//! specialist = "Neurologist / Ophthalmologist"
//! keywords = ["headache", "blurry", "vision"]
//! ```
//!
//! Loaded catalogs are validated: at least one entry, every entry with a
//! non-empty specialist label and at least one non-blank keyword. Keywords are
//! trimmed and lowercased on the way in.
//!
use crate::core::error::{Result, WizardError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Built-in profiles as `(description, specialist, keywords)`, in tie-break order.
const BUILTIN_PROFILES: &[(&str, &str, &[&str])] = &[
    (
        "Frequent headaches and blurry vision",
        "Neurologist / Ophthalmologist",
        &["frequent", "headaches", "blurry", "vision", "headache", "head", "eye", "sight"],
    ),
    (
        "Chest pain and shortness of breath",
        "Cardiologist / Pulmonologist",
        &["chest", "pain", "shortness", "breath", "breathing", "heart", "lung", "breathe"],
    ),
    (
        "Burning sensation during urination and lower abdominal pain",
        "Urologist / General Physician",
        &[
            "burning", "sensation", "urination", "lower", "abdominal", "pain", "urine", "pee",
            "stomach", "abdomen",
        ],
    ),
    (
        "High fever and rash in a child",
        "Pediatrician",
        &["high", "fever", "rash", "child", "kid", "baby", "temperature", "hot", "skin"],
    ),
    (
        "Persistent knee pain and morning stiffness",
        "Orthopedic Doctor / Rheumatologist",
        &["persistent", "knee", "pain", "morning", "stiffness", "joint", "bone", "stiff", "ache"],
    ),
    (
        "Anxiety, trouble sleeping, and loss of appetite",
        "Psychiatrist / Clinical Psychologist",
        &[
            "anxiety", "trouble", "sleeping", "loss", "appetite", "anxious", "sleep", "insomnia",
            "worried", "stress", "mental",
        ],
    ),
    (
        "Lump in the neck",
        "ENT Specialist / General Surgeon",
        &["lump", "neck", "swelling", "bump", "mass", "throat"],
    ),
    (
        "Stomach pain, nausea, and diarrhea",
        "Gastroenterologist",
        &["stomach", "pain", "nausea", "diarrhea", "belly", "gut", "digestive", "bowel", "vomit"],
    ),
    (
        "Severe acne and oily skin",
        "Dermatologist",
        &["severe", "acne", "oily", "skin", "pimples", "breakout", "face", "dermal"],
    ),
    (
        "Irregular menstrual cycles and hormonal issues",
        "Gynecologist / Endocrinologist",
        &[
            "irregular", "menstrual", "cycles", "hormonal", "issues", "period", "hormone",
            "menstruation", "female",
        ],
    ),
];

/// One symptom profile: a description, the specialist to recommend, and its trigger words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileEntry {
    /// Human-readable label for the symptom cluster. Never matched against.
    pub description: String,
    /// Opaque specialist label, e.g. "Cardiologist / Pulmonologist".
    pub specialist: String,
    /// Lowercase trigger words.
    pub keywords: Vec<String>,
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    entries: Vec<ProfileEntry>,
}

/// The ordered, validated, immutable list of profile entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ProfileEntry>,
}

impl Catalog {
    /// Builds a catalog from entries, normalizing keywords and enforcing the
    /// non-empty invariants.
    pub fn new(entries: Vec<ProfileEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(WizardError::EmptyCatalog.into());
        }

        let mut normalized = Vec::with_capacity(entries.len());
        for (index, mut entry) in entries.into_iter().enumerate() {
            entry.specialist = entry.specialist.trim().to_string();
            if entry.specialist.is_empty() {
                return Err(WizardError::MissingSpecialist { index }.into());
            }

            // A blank keyword would be a substring of every token, so drop it.
            entry.keywords = entry
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if entry.keywords.is_empty() {
                return Err(WizardError::MissingKeywords {
                    index,
                    specialist: entry.specialist,
                }
                .into());
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        let entries = BUILTIN_PROFILES
            .iter()
            .map(|(description, specialist, keywords)| ProfileEntry {
                description: (*description).to_string(),
                specialist: (*specialist).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Parses and validates a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).context("Failed to parse catalog TOML")?;
        Self::new(file.entries)
    }

    /// Reads, parses and validates a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading specialist catalog from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
        debug!("Loaded {} catalog entries.", catalog.entries.len());
        Ok(catalog)
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    /// Every distinct specialist label, first occurrence order.
    pub fn specialists(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !labels.contains(&entry.specialist.as_str()) {
                labels.push(&entry.specialist);
            }
        }
        labels
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(specialist: &str, keywords: &[&str]) -> ProfileEntry {
        ProfileEntry {
            description: format!("{} cases", specialist),
            specialist: specialist.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_order_and_invariants() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.entries().len(), 10);
        assert_eq!(
            catalog.entries()[0].specialist,
            "Neurologist / Ophthalmologist"
        );
        assert_eq!(
            catalog.entries()[9].specialist,
            "Gynecologist / Endocrinologist"
        );
        for e in catalog.entries() {
            assert!(!e.keywords.is_empty());
            assert!(e.keywords.iter().all(|k| *k == k.to_lowercase()));
        }
        // The builtin table must itself pass validation unchanged.
        assert_eq!(Catalog::new(catalog.entries().to_vec()).unwrap(), catalog);
    }

    #[test]
    fn test_specialists_are_distinct() {
        let catalog = Catalog::new(vec![
            entry("Dermatologist", &["acne"]),
            entry("Pediatrician", &["child"]),
            entry("Dermatologist", &["skin"]),
        ])
        .unwrap();
        assert_eq!(catalog.specialists(), vec!["Dermatologist", "Pediatrician"]);
        assert_eq!(Catalog::builtin().specialists().len(), 10);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WizardError>(),
            Some(&WizardError::EmptyCatalog)
        );
    }

    #[test]
    fn test_entry_without_keywords_rejected() {
        let err = Catalog::new(vec![
            entry("Dermatologist", &["acne"]),
            entry("Pediatrician", &["  ", ""]),
        ])
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<WizardError>(),
            Some(&WizardError::MissingKeywords {
                index: 1,
                specialist: "Pediatrician".into()
            })
        );
    }

    #[test]
    fn test_blank_specialist_rejected() {
        let err = Catalog::new(vec![entry("   ", &["acne"])]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WizardError>(),
            Some(&WizardError::MissingSpecialist { index: 0 })
        );
    }

    #[test]
    fn test_keywords_normalized() {
        let catalog = Catalog::new(vec![entry("Dermatologist", &[" Acne ", "OILY"])]).unwrap();
        assert_eq!(catalog.entries()[0].keywords, vec!["acne", "oily"]);
    }

    #[test]
    fn test_from_toml_str() {
        let toml_content = r#"
            [[entries]]
            description = "Ear trouble"
            specialist = "ENT Specialist"
            keywords = ["ear", "hearing"]

            [[entries]]
            description = "Tooth pain"
            specialist = "Dentist"
            keywords = ["tooth", "gum"]
        "#;
        let catalog = Catalog::from_toml_str(toml_content).unwrap();
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.entries()[1].specialist, "Dentist");
    }

    #[test]
    fn test_from_toml_str_unknown_field() {
        let toml_content = r#"
            [[entries]]
            description = "Ear trouble"
            specialist = "ENT Specialist"
            keywords = ["ear"]
            priority = 3
        "#;
        assert!(Catalog::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("nope.toml"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read catalog file"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[entries]]\ndescription = \"d\"\nspecialist = \"Dentist\"\nkeywords = [\"tooth\"]\n",
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.specialists(), vec!["Dentist"]);
    }
}
