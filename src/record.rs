//! record.rs — Read-only input records fetched by the caller.
//!
//! The engine never loads these itself; an outer handler (or a test) supplies
//! an immutable snapshot of a user's answers and sessions. Ratings arrive as
//! loosely-typed text (the upstream store keeps them in a varchar column), so
//! parsing is deliberately lenient: a leading signed integer counts, anything
//! else degrades to "no rating".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One answered interview question with its rating and free-text feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// Identifier of the owning session.
    pub session_ref: String,
    /// Nominally "1".."10"; may be missing or non-numeric.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<String>,
    /// Free-form reviewer feedback; may be empty.
    #[serde(default)]
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

/// A practice interview session. Owns zero or more answers via `session_ref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

impl AnswerRecord {
    /// Rating mapped onto the 0–100 scale (rating × 10).
    ///
    /// Missing or unparsable ratings degrade to 0 rather than erroring.
    /// Out-of-domain ratings (e.g. 12) are not validated and propagate as-is.
    pub fn score(&self) -> f64 {
        let rating = self
            .rating
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(0);
        (rating * 10) as f64
    }
}

/// Parse a leading signed integer, ignoring leading whitespace and any
/// trailing garbage ("8/10" → 8, "  7 good" → 7, "n/a" → None).
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => (-1i64, r),
        None => (1i64, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Accept the rating as either a JSON string or a bare number; anything else
/// (null, objects, ...) is treated as missing.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn answer(rating: Option<&str>) -> AnswerRecord {
        AnswerRecord {
            session_ref: "s1".into(),
            rating: rating.map(String::from),
            feedback: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn parse_leading_int_handles_common_shapes() {
        assert_eq!(parse_leading_int("8"), Some(8));
        assert_eq!(parse_leading_int(" 8"), Some(8));
        assert_eq!(parse_leading_int("8/10"), Some(8));
        assert_eq!(parse_leading_int("8.5"), Some(8));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("n/a"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn score_scales_rating_by_ten() {
        assert_eq!(answer(Some("7")).score(), 70.0);
        assert_eq!(answer(Some("10")).score(), 100.0);
    }

    #[test]
    fn missing_or_garbage_rating_scores_zero() {
        assert_eq!(answer(None).score(), 0.0);
        assert_eq!(answer(Some("excellent")).score(), 0.0);
    }

    #[test]
    fn rating_deserializes_from_string_or_number() {
        let from_str: AnswerRecord = serde_json::from_str(
            r#"{"sessionRef":"s1","rating":"8","feedback":"","createdAt":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(from_str.rating.as_deref(), Some("8"));

        let from_num: AnswerRecord = serde_json::from_str(
            r#"{"sessionRef":"s1","rating":8,"createdAt":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(from_num.rating.as_deref(), Some("8"));
        assert_eq!(from_num.feedback, "");

        let absent: AnswerRecord =
            serde_json::from_str(r#"{"sessionRef":"s1","createdAt":"2025-01-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(absent.rating, None);
    }
}
