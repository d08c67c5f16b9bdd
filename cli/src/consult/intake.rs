//! # Intake Answer Parsing
//!
//! File: cli/src/consult/intake.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Validation and extraction for the three intake answers: name, age and gender.
//! Every function here is pure and returns `None` for an answer that should be
//! asked for again.
//!
//! ## Name extraction
//!
//! People rarely type only their name. They say "hey, it's Dr. Smith!" or
//! "my name is anna". Extraction runs the [`StripRule`]s in [`StripRule::ORDER`],
//! each once, then title-cases what is left:
//!
//! 1. `LeadingGreeting`: "hey, it's dr. smith!" -> "it's dr. smith!"
//! 2. `Introduction`: "it's dr. smith!" -> "dr. smith!"
//! 3. `TrailingGreeting`: "dr. smith,hey" -> "dr. smith"
//! 4. `TrailingPunctuation`: "dr. smith!" -> "dr. smith"
//!
//! Input that is nothing but a greeting (see [`is_greeting_only`]) is rejected
//! before any stripping happens.
//!
use serde::Serialize;
use std::fmt;

/// Greeting phrases recognised at either end of a name answer.
pub const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Self-introduction phrases removed from the start of a name answer.
pub const INTRODUCTIONS: &[&str] = &["i am", "i'm", "my name is", "this is", "it's", "its"];

/// Shortest accepted name, in characters.
const MIN_NAME_CHARS: usize = 2;

/// One step of name extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripRule {
    /// A greeting at the start, plus any commas/whitespace after it.
    LeadingGreeting,
    /// "I am", "my name is", ... followed by whitespace.
    Introduction,
    /// A greeting at the end, plus any commas/whitespace before it.
    TrailingGreeting,
    /// Trailing `.,!?` characters, then surrounding whitespace.
    TrailingPunctuation,
}

impl StripRule {
    /// The order rules are applied in during extraction.
    pub const ORDER: [StripRule; 4] = [
        StripRule::LeadingGreeting,
        StripRule::Introduction,
        StripRule::TrailingGreeting,
        StripRule::TrailingPunctuation,
    ];

    /// Applies this rule once, returning the remaining slice.
    pub fn apply(self, text: &str) -> &str {
        match self {
            StripRule::LeadingGreeting => GREETINGS
                .iter()
                .find_map(|greeting| strip_prefix_ignore_case(text, greeting))
                .map(|rest| rest.trim_start_matches(is_separator))
                .unwrap_or(text),
            StripRule::Introduction => INTRODUCTIONS
                .iter()
                .filter_map(|intro| strip_prefix_ignore_case(text, intro))
                .find(|rest| rest.starts_with(char::is_whitespace))
                .map(str::trim_start)
                .unwrap_or(text),
            StripRule::TrailingGreeting => GREETINGS
                .iter()
                .find_map(|greeting| strip_suffix_ignore_case(text, greeting))
                .map(|rest| rest.trim_end_matches(is_separator))
                .unwrap_or(text),
            StripRule::TrailingPunctuation => text
                .trim_end_matches(['.', ',', '!', '?'])
                .trim(),
        }
    }
}

/// Whether the answer is only a greeting ("hey", "good morning", "hi there").
///
/// Compares the lowercased, trimmed answer against each greeting as the whole
/// string, as a prefix followed by a space, as a suffix preceded by a space, or
/// as the whole string with the greeting's space removed ("goodmorning").
pub fn is_greeting_only(input: &str) -> bool {
    let text = input.trim().to_lowercase();
    GREETINGS.iter().any(|greeting| {
        text == *greeting
            || text.starts_with(&format!("{} ", greeting))
            || text.ends_with(&format!(" {}", greeting))
            || text == greeting.replace(' ', "")
    })
}

/// Pulls a title-cased name out of a free-form answer.
pub fn extract_name(input: &str) -> Option<String> {
    if is_greeting_only(input) {
        return None;
    }

    let stripped = StripRule::ORDER
        .iter()
        .fold(input.trim(), |text, rule| rule.apply(text));

    if stripped.chars().count() < MIN_NAME_CHARS {
        return None;
    }
    Some(title_case(stripped))
}

/// Accepts any answer that reads as a number and returns it unchanged.
///
/// "Number" follows the usual browser numeric conversion: surrounding
/// whitespace is ignored, and decimal and exponent forms, `0x`/`0o`/`0b`
/// literals and a signed `Infinity` are all accepted. Empty text reads as zero.
pub fn parse_age(input: &str) -> Option<String> {
    is_numeric(input.trim()).then(|| input.to_string())
}

fn is_numeric(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }
    if let Some(radix) = radix_literal(text) {
        let digits = &text[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    // Rust also parses "inf" and "nan"; letters other than exponents are not numbers here.
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && text.parse::<f64>().is_ok()
}

fn radix_literal(text: &str) -> Option<u32> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    match prefix.as_str() {
        "0x" => Some(16),
        "0o" => Some(8),
        "0b" => Some(2),
        _ => None,
    }
}

/// The closed set of accepted gender answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Case-insensitive parse of "male" / "female".
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Canonical lowercase form.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

// Phrases are ASCII, so a byte-length slice is a valid comparison window
// whenever it lands on a char boundary (`get` checks that).
fn strip_prefix_ignore_case<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    text.get(..phrase.len())
        .filter(|head| head.eq_ignore_ascii_case(phrase))
        .map(|_| &text[phrase.len()..])
}

fn strip_suffix_ignore_case<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(phrase.len())?;
    text.get(split..)
        .filter(|tail| tail.eq_ignore_ascii_case(phrase))
        .map(|_| &text[..split])
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
