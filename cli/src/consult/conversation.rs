//! # Conversation State Machine
//!
//! File: cli/src/consult/conversation.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Wizard` turns one user message plus the current [`Session`] into one reply
//! plus the next `Session`. It owns only the immutable catalog, so the same
//! wizard can drive any number of sessions and every turn is reproducible.
//!
//! ## Turn precedence
//!
//! Checked in this order on the trimmed, lowercased input:
//!
//! 1. Contains `new` anywhere: start over (profile, symptom log and stage reset).
//!    This is a plain substring test, so "a new rash" also resets.
//! 2. Contains `hi` or `hello` while still in intake: greet the user and stay put.
//!    Symptom stages skip this check, so "hi" there is just symptom text.
//! 3. Blank input: generic re-prompt for the current stage.
//! 4. Otherwise, the handler for the current stage.
//!
//! ## Stages
//!
//! ```text
//! Name -> Age -> Gender -> Symptoms -> AdditionalSymptoms -+
//!                                            ^             |
//!                                            +-------------+
//! (any stage) --"new"--> Name
//! ```
//!
//! Invalid intake answers re-prompt without touching the stage or profile.
//!
use super::catalog::Catalog;
use super::intake::{self, Gender};
use super::matcher::{SymptomMatcher, FALLBACK_SPECIALIST};
use super::replies;
use super::session::{Session, Stage};
use tracing::debug;

const RESET_TRIGGER: &str = "new";
const GREETING_TRIGGERS: &[&str] = &["hi", "hello"];

/// The consultation engine.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    catalog: Catalog,
}

impl Wizard {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn matcher(&self) -> SymptomMatcher<'_> {
        SymptomMatcher::new(&self.catalog)
    }

    /// The first message of every conversation, shown before any input.
    pub fn opening(&self) -> &'static str {
        replies::OPENING
    }

    /// Processes one user message.
    ///
    /// Consumes the current session and returns the next one with the reply.
    pub fn respond(&self, session: Session, input: &str) -> (Session, String) {
        let lowered = input.trim().to_lowercase();

        if lowered.contains(RESET_TRIGGER) {
            debug!("Reset requested from stage {:?}.", session.stage);
            return (Session::new(), replies::RESET.to_string());
        }

        if !session.stage.collects_symptoms()
            && GREETING_TRIGGERS.iter().any(|g| lowered.contains(g))
        {
            debug!("Greeting intercepted in stage {:?}.", session.stage);
            let reply = replies::greeting(session.profile.name());
            return (session, reply);
        }

        if lowered.is_empty() {
            let reply = replies::not_understood(session.stage);
            return (session, reply);
        }

        let stage_before = session.stage;
        let (next, reply) = match session.stage {
            Stage::Name => self.collect_name(session, input),
            Stage::Age => self.collect_age(session, input),
            Stage::Gender => self.collect_gender(session, input),
            Stage::Symptoms | Stage::AdditionalSymptoms => self.collect_symptoms(session, input),
        };
        if next.stage != stage_before {
            debug!("Stage {:?} -> {:?}.", stage_before, next.stage);
        }
        (next, reply)
    }

    fn collect_name(&self, mut session: Session, input: &str) -> (Session, String) {
        match intake::extract_name(input) {
            Some(name) => {
                let reply = replies::name_accepted(&name);
                session.profile.name = Some(name);
                session.stage = Stage::Age;
                (session, reply)
            }
            None => (session, replies::ASK_NAME.to_string()),
        }
    }

    fn collect_age(&self, mut session: Session, input: &str) -> (Session, String) {
        match intake::parse_age(input) {
            Some(age) => {
                session.profile.age = Some(age);
                session.stage = Stage::Gender;
                (session, replies::AGE_ACCEPTED.to_string())
            }
            None => (session, replies::AGE_INVALID.to_string()),
        }
    }

    fn collect_gender(&self, mut session: Session, input: &str) -> (Session, String) {
        match Gender::parse(input) {
            Some(gender) => {
                session.profile.gender = Some(gender);
                session.stage = Stage::Symptoms;
                let reply = replies::gender_accepted(session.profile.name().unwrap_or_default());
                (session, reply)
            }
            None => (session, replies::GENDER_INVALID.to_string()),
        }
    }

    fn collect_symptoms(&self, mut session: Session, input: &str) -> (Session, String) {
        session.symptoms.push(input.to_string());
        let combined = session.combined_symptoms();
        let matched = self.matcher().best_match(&combined);
        debug!(
            "Matched {:?} from {} symptom description(s).",
            matched,
            session.symptoms.len()
        );
        let reply = replies::recommendation(matched, FALLBACK_SPECIALIST);
        session.stage = Stage::AdditionalSymptoms;
        (session, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds `inputs` through a fresh session, returning the final session and the last reply.
    fn run(wizard: &Wizard, inputs: &[&str]) -> (Session, String) {
        inputs
            .iter()
            .fold((Session::new(), String::new()), |(session, _), input| {
                wizard.respond(session, input)
            })
    }

    fn intake_done(wizard: &Wizard) -> Session {
        let (session, reply) = run(wizard, &["john", "42", "Male"]);
        assert!(reply.starts_with("Thank you John!"));
        session
    }

    #[test]
    fn test_full_intake() {
        let wizard = Wizard::default();

        let (session, reply) = wizard.respond(Session::new(), "john");
        assert_eq!(reply, "Nice to meet you, John! Could you please tell me your age?");
        assert_eq!(session.stage(), Stage::Age);
        assert_eq!(session.profile().name(), Some("John"));

        let (session, reply) = wizard.respond(session, "42");
        assert_eq!(reply, replies::AGE_ACCEPTED);
        assert_eq!(session.stage(), Stage::Gender);
        assert_eq!(session.profile().age(), Some("42"));

        let (session, reply) = wizard.respond(session, "Male");
        assert!(reply.contains("please describe your symptoms"));
        assert_eq!(session.stage(), Stage::Symptoms);
        assert_eq!(session.profile().gender(), Some(Gender::Male));
    }

    #[test]
    fn test_greeting_only_name_keeps_stage() {
        let wizard = Wizard::default();
        for input in ["hey", "good morning", "goodevening", "hey there"] {
            let (session, reply) = wizard.respond(Session::new(), input);
            assert_eq!(reply, replies::ASK_NAME, "input {:?}", input);
            assert_eq!(session.stage(), Stage::Name);
            assert_eq!(session.profile().name(), None);
        }
    }

    #[test]
    fn test_hi_during_intake_is_a_greeting() {
        let wizard = Wizard::default();

        let (session, reply) = wizard.respond(Session::new(), "DR. SMITH HI");
        assert_eq!(reply, "Hello! Could you please tell me your name to get started?");
        assert_eq!(session.stage(), Stage::Name);
        assert!(session.profile().is_empty());

        let (session, _) = wizard.respond(session, "anna");
        let (session, reply) = wizard.respond(session, "hello again");
        assert!(reply.starts_with("Hello Anna! How can I help you today?"));
        assert_eq!(session.stage(), Stage::Age);
    }

    #[test]
    fn test_layered_name_answer() {
        let wizard = Wizard::default();
        let (session, reply) = wizard.respond(Session::new(), "hey, it's dr. smith!");
        assert_eq!(
            reply,
            "Nice to meet you, Dr. Smith! Could you please tell me your age?"
        );
        assert_eq!(session.profile().name(), Some("Dr. Smith"));
    }

    #[test]
    fn test_invalid_age_reprompts() {
        let wizard = Wizard::default();
        let (session, _) = run(&wizard, &["john"]);
        let (session, reply) = wizard.respond(session, "abc");
        assert_eq!(reply, replies::AGE_INVALID);
        assert_eq!(session.stage(), Stage::Age);
        assert_eq!(session.profile().age(), None);
    }

    #[test]
    fn test_age_stored_as_typed() {
        let wizard = Wizard::default();
        let (session, _) = run(&wizard, &["john"]);
        let (session, reply) = wizard.respond(session, " 0x1F ");
        assert_eq!(reply, replies::AGE_ACCEPTED);
        assert_eq!(session.stage(), Stage::Gender);
        assert_eq!(session.profile().age(), Some(" 0x1F "));
    }

    #[test]
    fn test_invalid_gender_reprompts() {
        let wizard = Wizard::default();
        let (session, _) = run(&wizard, &["john", "30"]);
        let (session, reply) = wizard.respond(session, "robot");
        assert_eq!(reply, replies::GENDER_INVALID);
        assert_eq!(session.stage(), Stage::Gender);
        assert_eq!(session.profile().gender(), None);

        let (session, _) = wizard.respond(session, "FEMALE");
        assert_eq!(session.profile().gender(), Some(Gender::Female));
    }

    #[test]
    fn test_symptom_recommendation() {
        let wizard = Wizard::default();
        let session = intake_done(&wizard);
        let (session, reply) =
            wizard.respond(session, "I have chest pain and shortness of breath");
        assert!(reply.contains("**Cardiologist / Pulmonologist**"));
        assert!(reply.contains(replies::REFERENCE_URL));
        assert_eq!(session.stage(), Stage::AdditionalSymptoms);
        assert_eq!(session.symptoms().len(), 1);
    }

    #[test]
    fn test_no_match_falls_back_to_general_physician() {
        let wizard = Wizard::default();
        let session = intake_done(&wizard);
        let (_, reply) = wizard.respond(session, "feeling dizzy");
        assert!(reply.contains("starting with a **General Physician**"));
    }

    #[test]
    fn test_symptoms_accumulate_across_turns() {
        let wizard = Wizard::default();
        let session = intake_done(&wizard);

        let (session, reply) = wizard.respond(session, "blurry");
        assert!(reply.contains("**General Physician**"));

        let (session, reply) = wizard.respond(session, "my eyes");
        assert!(reply.contains("**Neurologist / Ophthalmologist**"));
        assert_eq!(session.combined_symptoms(), "blurry. my eyes");
        assert_eq!(session.stage(), Stage::AdditionalSymptoms);
    }

    #[test]
    fn test_hi_is_symptom_text_after_intake() {
        let wizard = Wizard::default();
        let session = intake_done(&wizard);
        // "chills" contains "hi" but is recorded as a symptom.
        let (session, reply) = wizard.respond(session, "chills");
        assert!(reply.starts_with("Based on your symptoms"));
        assert_eq!(session.symptoms(), ["chills".to_string()]);
    }

    #[test]
    fn test_new_resets_from_any_stage() {
        let wizard = Wizard::default();
        let session = intake_done(&wizard);
        let (session, _) = wizard.respond(session, "headache");
        assert!(!session.symptoms().is_empty());

        let (session, reply) = wizard.respond(session, "Start a NEW one please");
        assert_eq!(reply, replies::RESET);
        assert_eq!(session, Session::new());

        let (session, _) = run(&wizard, &["john"]);
        let (session, reply) = wizard.respond(session, "new");
        assert_eq!(reply, replies::RESET);
        assert_eq!(session.stage(), Stage::Name);
    }

    #[test]
    fn test_new_inside_symptom_text_resets() {
        let wizard = Wizard::default();
        let session = intake_done(&wizard);
        let (session, reply) = wizard.respond(session, "I have a new rash");
        assert_eq!(reply, replies::RESET);
        assert!(session.profile().is_empty());
    }

    #[test]
    fn test_blank_input_gets_generic_reprompt() {
        let wizard = Wizard::default();
        let (session, _) = run(&wizard, &["john"]);
        let (session, reply) = wizard.respond(session, "   ");
        assert!(reply.starts_with("I'm sorry, I didn't understand that. Could you please tell me your age?"));
        assert!(reply.ends_with(replies::REFERENCE_URL));
        assert_eq!(session.stage(), Stage::Age);

        let session = intake_done(&wizard);
        let (session, _) = wizard.respond(session, "");
        assert!(session.symptoms().is_empty());
    }

    #[test]
    fn test_turns_are_deterministic() {
        let wizard = Wizard::default();
        let inputs = ["john", "42", "Male", "knee pain"];
        assert_eq!(run(&wizard, &inputs), run(&wizard, &inputs));
    }
}
