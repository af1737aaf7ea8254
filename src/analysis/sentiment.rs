//! Sentiment score decoding
//!
//! The sentiment prompt asks for a bare number, but models decorate answers
//! ("85/100", "Score: 85."). Decoding strips every non-digit character and
//! parses what remains; an empty or overflowing remainder becomes the
//! unscored sentinel. This step recovers locally and never surfaces an
//! error to the user.

use crate::journal::SentimentScore;

/// Parse a sentiment response into a score
///
/// Note the concatenation semantics: "85/100" parses as 85100, which is kept
/// on the entry but falls outside [0, 100] and is therefore excluded from
/// every aggregate.
///
/// # Examples
///
/// ```
/// use reme::analysis::parse_score;
/// use reme::journal::SentimentScore;
///
/// assert_eq!(parse_score("85"), SentimentScore(85));
/// assert_eq!(parse_score("I'd say about 70."), SentimentScore(70));
/// assert_eq!(parse_score("hard to say"), SentimentScore::UNSCORED);
/// ```
pub fn parse_score(text: &str) -> SentimentScore {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i32>() {
        Ok(value) => SentimentScore(value),
        Err(_) => SentimentScore::UNSCORED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_number() {
        assert_eq!(parse_score("85"), SentimentScore(85));
    }

    #[test]
    fn test_number_with_surrounding_prose() {
        assert_eq!(parse_score("Score: 42."), SentimentScore(42));
        assert_eq!(parse_score("I would rate this a 7"), SentimentScore(7));
    }

    #[test]
    fn test_whitespace_and_newlines() {
        assert_eq!(parse_score("  90 \n"), SentimentScore(90));
    }

    #[test]
    fn test_no_digits_yields_sentinel() {
        assert_eq!(parse_score("hard to say"), SentimentScore::UNSCORED);
        assert_eq!(parse_score(""), SentimentScore::UNSCORED);
    }

    #[test]
    fn test_digit_concatenation_keeps_raw_value() {
        // "85/100" concatenates to 85100; out of range, so aggregation
        // excludes it, but the decode itself does not fail.
        let score = parse_score("85/100");
        assert_eq!(score, SentimentScore(85100));
        assert!(!score.is_valid());
    }

    #[test]
    fn test_overflow_yields_sentinel() {
        let score = parse_score("99999999999999999999");
        assert_eq!(score, SentimentScore::UNSCORED);
    }

    #[test]
    fn test_zero_and_hundred_are_valid() {
        assert!(parse_score("0").is_valid());
        assert!(parse_score("100").is_valid());
    }
}
