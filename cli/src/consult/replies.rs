//! # Reply Templates
//!
//! File: cli/src/consult/replies.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every message the wizard can send. Messages are plain text with two
//! conventions front ends are expected to honour:
//! - `**text**` marks an emphasis span.
//! - `\n` separates display paragraphs.
//!
//! [`REFERENCE_URL`] must appear verbatim so front ends can detect and link it.
//!
use super::session::Stage;

/// External symptom reference embedded in several replies.
pub const REFERENCE_URL: &str = "https://symptoms.webmd.com/";

pub const OPENING: &str = "Hi! I'm Medi Wizard, your AI health assistant. Before we begin, could you please tell me your name?";

pub const ASK_NAME: &str = "Could you please tell me your name?";

pub const AGE_INVALID: &str =
    "I'm sorry, I didn't catch that. Could you please enter your age as a number?";

pub const AGE_ACCEPTED: &str =
    "Thank you! And what is your gender? Please enter 'Male' or 'Female'.";

pub const GENDER_INVALID: &str = "I'm sorry, I didn't understand that. Please enter either 'Male' or 'Female' for your gender.";

pub const RESET: &str = "Starting a new consultation. Could you please tell me your name?";

pub fn name_accepted(name: &str) -> String {
    format!(
        "Nice to meet you, {}! Could you please tell me your age?",
        name
    )
}

pub fn gender_accepted(name: &str) -> String {
    format!(
        "Thank you {}! Now, please describe your symptoms in detail. I'll analyze them and recommend the most appropriate specialist for you.",
        name
    )
}

/// Reply to "hi"/"hello" outside symptom collection.
pub fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!(
            "Hello {}! How can I help you today? You can tell me about additional symptoms or type 'new' to start a fresh consultation.",
            name
        ),
        None => "Hello! Could you please tell me your name to get started?".to_string(),
    }
}

/// Recommendation, disclaimer, reference link and next steps.
///
/// `matched` is the matcher's label; `None` produces the fallback wording.
pub fn recommendation(matched: Option<&str>, fallback: &str) -> String {
    let verdict = match matched {
        Some(label) => format!(
            "Based on your symptoms, I recommend consulting a **{}**.\n\n\
             This recommendation is based on matching your symptoms with our medical database. \
             The specialist(s) mentioned are best equipped to diagnose and treat your specific condition.",
            label
        ),
        None => format!(
            "Based on your symptoms, I recommend starting with a **{}**. \
             They can provide an initial assessment and refer you to a specialist if needed.\n\n\
             If your symptoms are severe or worsening, please seek immediate medical attention.",
            fallback
        ),
    };

    format!(
        "{}\n\n\
         **Important:** This is not a substitute for professional medical advice. \
         Always consult with healthcare professionals for proper diagnosis and treatment.\n\n\
         For additional symptom information, you can visit:\n{}\n\n\
         **What would you like to do next?**\n\
         • Tell me about **additional symptoms** you're experiencing\n\
         • Type **'new'** to start a fresh consultation",
        verdict, REFERENCE_URL
    )
}

/// Generic re-prompt naming what is still needed.
pub fn not_understood(stage: Stage) -> String {
    let ask = match stage {
        Stage::Name => ASK_NAME,
        Stage::Age => "Could you please tell me your age?",
        Stage::Gender => "Could you please tell me your gender (Male or Female)?",
        Stage::Symptoms | Stage::AdditionalSymptoms => {
            "Could you please provide more details about your symptoms?"
        }
    };
    format!(
        "I'm sorry, I didn't understand that. {}\n\nFor more detailed information, you can visit:\n{}",
        ask, REFERENCE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_with_match() {
        let text = recommendation(Some("Dermatologist"), "General Physician");
        assert!(text.starts_with("Based on your symptoms, I recommend consulting a **Dermatologist**."));
        assert!(text.contains("\nhttps://symptoms.webmd.com/\n"));
        assert!(text.contains("**Important:**"));
        assert!(text.ends_with("• Type **'new'** to start a fresh consultation"));
        assert!(!text.contains("General Physician"));
    }

    #[test]
    fn test_recommendation_fallback() {
        let text = recommendation(None, "General Physician");
        assert!(text.starts_with(
            "Based on your symptoms, I recommend starting with a **General Physician**."
        ));
        assert!(text.contains("seek immediate medical attention"));
        assert!(text.contains(REFERENCE_URL));
    }

    #[test]
    fn test_greeting_uses_name() {
        assert!(greeting(Some("John")).starts_with("Hello John!"));
        assert_eq!(
            greeting(None),
            "Hello! Could you please tell me your name to get started?"
        );
    }

    #[test]
    fn test_not_understood_names_missing_answer() {
        assert!(not_understood(Stage::Age).contains("your age?"));
        assert!(not_understood(Stage::Gender).contains("(Male or Female)"));
        assert!(not_understood(Stage::AdditionalSymptoms).contains("symptoms?"));
        assert!(not_understood(Stage::Name).ends_with(REFERENCE_URL));
    }
}
