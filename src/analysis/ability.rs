//! Six-axis ability assessment decoding
//!
//! The ability prompt asks for a JSON object of six named scores, but the
//! response arrives as free-form text that may wrap the object in prose or
//! code fences. Decoding scans for the brace-delimited object and strictly
//! parses it; failure yields a tagged error carrying the raw text, and the
//! caller skips that cycle's radar update.

use crate::error::{Result, RemeError};
use crate::journal::Entry;
use crate::prompts;
use crate::providers::{Message, Provider};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// The six ability axes, in fixed radar order
pub const ABILITY_AXES: [&str; 6] = [
    "empathy",
    "logic",
    "creativity",
    "action",
    "persistence",
    "self_awareness",
];

/// Scores for the six ability axes, aligned with [`ABILITY_AXES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScores {
    scores: [u32; 6],
}

impl AbilityScores {
    /// Score for one axis by name, if it is a known axis
    pub fn get(&self, axis: &str) -> Option<u32> {
        ABILITY_AXES
            .iter()
            .position(|a| *a == axis)
            .map(|i| self.scores[i])
    }

    /// Axis/score pairs in radar order
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        ABILITY_AXES.iter().copied().zip(self.scores.iter().copied())
    }
}

fn brace_object_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"))
}

/// Decode an ability response into scores
///
/// Locates the brace-delimited object in the response text and parses it as
/// JSON. Axes missing from the object default to 0 (matching the radar's
/// treatment of an unmentioned ability); a response with no object at all,
/// or an object that is not valid JSON, is a decode error.
///
/// # Errors
///
/// Returns `RemeError::ResponseDecode` carrying the raw response text when
/// no JSON object can be extracted or parsed.
///
/// # Examples
///
/// ```
/// use reme::analysis::ability::parse_scores;
///
/// let scores = parse_scores(r#"Here you go: {"empathy":70,"logic":60}"#).unwrap();
/// assert_eq!(scores.get("empathy"), Some(70));
/// assert_eq!(scores.get("creativity"), Some(0));
/// ```
pub fn parse_scores(raw: &str) -> Result<AbilityScores> {
    let object_text = brace_object_regex()
        .find(raw)
        .ok_or_else(|| RemeError::ResponseDecode {
            reason: "no JSON object found in response".to_string(),
            raw: raw.to_string(),
        })?
        .as_str();

    let value: serde_json::Value =
        serde_json::from_str(object_text).map_err(|e| RemeError::ResponseDecode {
            reason: format!("invalid JSON object: {}", e),
            raw: raw.to_string(),
        })?;

    let object = value.as_object().ok_or_else(|| RemeError::ResponseDecode {
        reason: "JSON value is not an object".to_string(),
        raw: raw.to_string(),
    })?;

    let mut scores = [0u32; 6];
    for (i, axis) in ABILITY_AXES.iter().enumerate() {
        scores[i] = object
            .get(*axis)
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
    }

    Ok(AbilityScores { scores })
}

/// Assess the six abilities for one calendar date
///
/// Concatenates the user text of every entry stamped on `date` and asks the
/// provider for scores. Returns `Ok(None)` when the date has no entries (no
/// provider call is made) or when the response fails to decode — a decode
/// failure is logged with its raw text and the cycle's update is skipped.
/// Provider call failures propagate to the caller.
pub async fn assess_date(
    provider: &dyn Provider,
    entries: &[Entry],
    date: NaiveDate,
) -> Result<Option<AbilityScores>> {
    let day_text = entries
        .iter()
        .filter(|e| e.timestamp.date() == date)
        .map(|e| e.user_text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    if day_text.is_empty() {
        return Ok(None);
    }

    let prompt = prompts::ability_prompt(&day_text);
    let response = provider.complete(&[Message::user(prompt)]).await?;

    match parse_scores(&response.content) {
        Ok(scores) => Ok(Some(scores)),
        Err(e) => {
            tracing::warn!("Skipping ability update for {}: {}", date, e);
            Ok(None)
        }
    }
}
