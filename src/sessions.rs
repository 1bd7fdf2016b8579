//! sessions.rs — Session Aggregator.
//!
//! Groups a user's answers by owning session, averages the ratings into a
//! per-session score on the 0–100 scale, and orders the sessions
//! chronologically. Sessions with no answers contribute nothing; a session id
//! that cannot be found among the provided sessions falls back to the current
//! time so the pipeline stays total even across inconsistent snapshots.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::record::{AnswerRecord, SessionRecord};

/// Per-session average score, derived and ephemeral.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionScore {
    pub session_id: String,
    /// Average of the session's answer ratings × 10 (unrounded).
    pub score: f64,
    pub date: DateTime<Utc>,
}

/// Group answers by session and average into chronologically ascending
/// `SessionScore`s. Empty input yields an empty list (the "no data" case).
pub fn aggregate(answers: &[AnswerRecord], sessions: &[SessionRecord]) -> Vec<SessionScore> {
    // First-seen order of session refs is kept so the later stable sort
    // breaks date ties deterministically by insertion order.
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();

    for a in answers {
        let bucket = groups.entry(a.session_ref.as_str()).or_insert_with(|| {
            order.push(a.session_ref.as_str());
            Vec::new()
        });
        bucket.push(a.score());
    }

    let mut scores: Vec<SessionScore> = order
        .into_iter()
        .map(|session_ref| {
            let samples = &groups[session_ref];
            let score = samples.iter().sum::<f64>() / samples.len() as f64;
            let date = sessions
                .iter()
                .find(|s| s.session_id == session_ref)
                .map(|s| s.created_at)
                .unwrap_or_else(Utc::now);
            SessionScore {
                session_id: session_ref.to_string(),
                score,
                date,
            }
        })
        .collect();

    // Vec::sort_by is stable; ties keep first-seen order.
    scores.sort_by(|a, b| a.date.cmp(&b.date));
    scores
}
