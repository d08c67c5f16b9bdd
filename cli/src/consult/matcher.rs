//! # Symptom Matcher
//!
//! File: cli/src/consult/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scores free-text symptom descriptions against the specialist catalog and
//! picks the best entry. Matching is plain keyword overlap:
//!
//! 1. The text is lowercased, trimmed and split on whitespace. Punctuation stays
//!    attached to its word ("headache." is one token).
//! 2. A keyword counts for an entry when any token equals it, contains it, or is
//!    contained by it. Each keyword counts once per entry.
//! 3. Entries with fewer than [`MIN_KEYWORD_HITS`] matched keywords are ignored.
//! 4. The highest count wins. On a tie, the earlier catalog entry wins.
//!
//! The substring test runs in both directions, so short tokens such as "a" or
//! "i" hit many keywords.
//!
use super::catalog::{Catalog, ProfileEntry};
use tracing::trace;

/// Entries need at least this many distinct keyword hits to qualify.
pub const MIN_KEYWORD_HITS: usize = 2;

/// Label recommended when no catalog entry qualifies.
pub const FALLBACK_SPECIALIST: &str = "General Physician";

/// Match count of a single catalog entry, as reported by [`SymptomMatcher::scores`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryScore<'a> {
    pub entry: &'a ProfileEntry,
    pub hits: usize,
}

impl EntryScore<'_> {
    /// Whether this entry has enough hits to be recommended.
    pub fn qualifies(&self) -> bool {
        self.hits >= MIN_KEYWORD_HITS
    }
}

/// Pure keyword-overlap matcher over a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct SymptomMatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> SymptomMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the recommended specialist label for `text`, or `None` when no
    /// entry reaches the hit threshold.
    pub fn best_match(&self, text: &str) -> Option<&'a str> {
        let mut best: Option<EntryScore<'a>> = None;
        for score in self.scores(text) {
            if !score.qualifies() {
                continue;
            }
            // Strictly greater: the first entry keeps ties.
            if best.as_ref().map_or(true, |b| score.hits > b.hits) {
                best = Some(score);
            }
        }
        best.map(|b| b.entry.specialist.as_str())
    }

    /// Like [`best_match`](Self::best_match), but substitutes [`FALLBACK_SPECIALIST`].
    pub fn recommend(&self, text: &str) -> &'a str {
        self.best_match(text).unwrap_or(FALLBACK_SPECIALIST)
    }

    /// Hit counts for every entry, in catalog order.
    pub fn scores(&self, text: &str) -> Vec<EntryScore<'a>> {
        let tokens = tokenize(text);
        self.catalog
            .entries()
            .iter()
            .map(|entry| {
                let hits = count_hits(&tokens, &entry.keywords);
                trace!("Entry '{}' scored {} hit(s).", entry.specialist, hits);
                EntryScore { entry, hits }
            })
            .collect()
    }

    /// Every distinct specialist label in the catalog.
    pub fn specialists(&self) -> Vec<&'a str> {
        self.catalog.specialists()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn count_hits(tokens: &[String], keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| {
            tokens.iter().any(|token| {
                token == *keyword || token.contains(keyword.as_str()) || keyword.contains(token.as_str())
            })
        })
        .count()
}
