//! Travel-intent detection for starting the guided questionnaire.

/// Phrases whose presence signals travel intent.
pub const TRIGGER_PHRASES: &[&str] = &[
    "plan a trip",
    "travel plan",
    "going to",
    "visit",
    "trip to",
    "travel to",
    "planning to go",
    "want to travel",
    "journey to",
    "vacation to",
];

/// Whether `text` should start the travel questionnaire.
///
/// This is an approximate gate: a case-insensitive substring match against
/// [`TRIGGER_PHRASES`]. It misses intent phrased any other way and fires on
/// unrelated uses of the phrases ("I'm going to cook").
pub fn should_start_questionnaire(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRIGGER_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
