//! Prompt builders for every completion call
//!
//! Each pipeline step sends a fixed prompt shape; the builders here are the
//! single place those shapes live. Length caps mentioned in the weekly
//! report prompt are a request to the model, never validated on responses.

use crate::analysis::ability::ABILITY_AXES;

/// System prompt seeding every journaling session
pub const REFLECTION_SYSTEM_PROMPT: &str =
    "You are an empathetic reflection companion. Listen to what the user \
     shares about their day, acknowledge their feelings, and respond with \
     warmth and curiosity.";

/// Prompt asking for a bare numeric positivity score for one entry
///
/// The response is decoded defensively in `analysis::sentiment`; anything
/// that fails to parse becomes the unscored sentinel.
pub fn sentiment_prompt(user_text: &str) -> String {
    format!(
        "Rate the positivity of the following text on a scale of 0 to 100. \
         Answer with the number only.\n\n{}",
        user_text
    )
}

/// Prompt asking for six named ability scores as a JSON object
pub fn ability_prompt(day_text: &str) -> String {
    format!(
        "From the following text, rate each of these six abilities out of 100:\n\
         - {axes}\n\n\
         Answer with a JSON object only, for example:\n\
         {{\"{first}\":70,\"{second}\":60,...}}\n\n\
         Text:\n{text}",
        axes = ABILITY_AXES.join(", "),
        first = ABILITY_AXES[0],
        second = ABILITY_AXES[1],
        text = day_text
    )
}

/// Prompt asking for the three-part weekly retrospective
///
/// Parts: a summary of at most 200 characters, a commentary of at most 150
/// characters, and a one-line suggestion of at most 50 characters.
pub fn weekly_report_prompt(logs: &str) -> String {
    format!(
        "From the user's journal entries of the past week, produce exactly \
         three labeled parts:\n\n\
         1. Summary (max 200 characters): the overall emotional and thematic arc\n\
         2. Commentary (max 150 characters): notable changes or patterns\n\
         3. Suggestion (max 50 characters): one line of advice for next week\n\n\
         Entries:\n{}",
        logs
    )
}

/// Persona prompt for memorial mode
///
/// Reconstructs a voice from a person's own journal texts and answers a
/// visitor's question in that voice.
pub fn memorial_prompt(persona_texts: &str, visitor_question: &str) -> String {
    format!(
        "You are a persona reconstructed from the reflective journal below, \
         written by its author. Answer the visitor's question in the \
         author's own style and values.\n\n\
         [Journal]:\n{}\n\n\
         [Question]:\n{}",
        persona_texts, visitor_question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_prompt_includes_text_and_scale() {
        let prompt = sentiment_prompt("Today was rough.");
        assert!(prompt.contains("0 to 100"));
        assert!(prompt.contains("number only"));
        assert!(prompt.contains("Today was rough."));
    }

    #[test]
    fn test_ability_prompt_names_all_axes() {
        let prompt = ability_prompt("some day text");
        for axis in ABILITY_AXES {
            assert!(prompt.contains(axis), "missing axis {}", axis);
        }
        assert!(prompt.contains("JSON"));
        assert!(prompt.contains("some day text"));
    }

    #[test]
    fn test_weekly_report_prompt_requests_three_parts() {
        let prompt = weekly_report_prompt("day one\nday two");
        assert!(prompt.contains("Summary"));
        assert!(prompt.contains("Commentary"));
        assert!(prompt.contains("Suggestion"));
        assert!(prompt.contains("200"));
        assert!(prompt.contains("150"));
        assert!(prompt.contains("50"));
        assert!(prompt.contains("day one\nday two"));
    }

    #[test]
    fn test_memorial_prompt_embeds_persona_and_question() {
        let prompt = memorial_prompt("I always loved mornings.", "What did you love?");
        assert!(prompt.contains("I always loved mornings."));
        assert!(prompt.contains("What did you love?"));
    }
}
