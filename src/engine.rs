//! # Performance Analytics Engine
//! Pure, testable pipeline that maps `(answers, sessions)` → `PerformanceReport`.
//! No I/O, suitable for unit tests and offline evaluation.
//!
//! Flow: answers are grouped into chronologically ordered per-session scores,
//! independently classified into per-skill scores, and both feed the trend
//! summary. An empty answer list short-circuits to the canonical zero report
//! (even when sessions exist — sessions contribute only through answers).

use tracing::debug;

use crate::record::{AnswerRecord, SessionRecord};
use crate::report::PerformanceReport;
use crate::{sessions, skills, trend};

/// End-to-end pipeline over an immutable snapshot of a user's history.
///
/// Total by design: malformed ratings degrade to 0, unknown session refs
/// fall back to the current time, and empty input degrades to the zero
/// report. Stateless and re-entrant; safe to call concurrently.
pub fn compute_performance_report(
    answers: &[AnswerRecord],
    sessions_in: &[SessionRecord],
) -> PerformanceReport {
    if answers.is_empty() {
        return PerformanceReport::default();
    }

    let session_scores = sessions::aggregate(answers, sessions_in);
    let skill_scores = skills::classify(answers);
    let summary = trend::summarize(&session_scores, &skill_scores);

    debug!(
        answers = answers.len(),
        sessions = session_scores.len(),
        overall = summary.overall_score,
        "performance report computed"
    );

    PerformanceReport {
        overall_score: summary.overall_score,
        interviews_taken: sessions_in.len() as i32,
        average_confidence: summary.average_confidence,
        improvement_rate: summary.improvement_rate,
        skill_scores,
        progress_over_time: summary.progress_over_time,
        weak_areas: summary.weak_areas,
        strengths: summary.strengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn answer(session: &str, rating: &str, feedback: &str) -> AnswerRecord {
        AnswerRecord {
            session_ref: session.into(),
            rating: Some(rating.into()),
            feedback: feedback.into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    fn session(id: &str, day: u32) -> SessionRecord {
        SessionRecord {
            session_id: id.into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_answers_short_circuit_even_with_sessions() {
        let sessions = vec![session("a", 1), session("b", 2)];
        let report = compute_performance_report(&[], &sessions);
        // interviewsTaken is 0 on the short-circuit path, by contract.
        assert_eq!(report, PerformanceReport::default());
    }

    #[test]
    fn interviews_taken_counts_all_sessions() {
        let answers = vec![answer("a", "8", "")];
        let sessions = vec![session("a", 1), session("empty", 2)];
        let report = compute_performance_report(&answers, &sessions);
        assert_eq!(report.interviews_taken, 2);
        // The answerless session is absent from the progress series.
        assert_eq!(report.progress_over_time.len(), 1);
    }

    #[test]
    fn report_is_deterministic_for_the_same_snapshot() {
        let answers = vec![
            answer("a", "8", "Clear communication."),
            answer("b", "6", ""),
        ];
        let sessions = vec![session("a", 1), session("b", 2)];
        let first = compute_performance_report(&answers, &sessions);
        let second = compute_performance_report(&answers, &sessions);
        assert_eq!(first, second);
    }
}
