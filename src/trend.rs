//! trend.rs — Trend & Summary Builder.
//!
//! Consumes chronologically ordered session scores plus the per-skill
//! breakdown and produces the summary half of the report: overall score,
//! improvement rate (first-half vs second-half average), a bounded
//! recent-progress series, and the weak-area/strength split.
//!
//! Note on the improvement rate: the intermediate computation can go
//! negative, but the reported value is floored at 0. That is a product-level
//! decision inherited from the dashboard this feeds (a raw negative trend is
//! deliberately not surfaced), not an overflow guard.

use serde::{Deserialize, Serialize};

use crate::sessions::SessionScore;
use crate::skills::{improvement_advice, SkillScore};

/// Skills scoring below this are weak areas.
pub const WEAK_AREA_THRESHOLD: i32 = 70;
/// Skills scoring at or above this are strengths. The 70–74 band between the
/// two thresholds belongs to neither list, which keeps them disjoint.
pub const STRENGTH_THRESHOLD: i32 = 75;
/// How many recent sessions the progress series keeps.
pub const PROGRESS_WINDOW: usize = 5;
/// Confidence is not measured independently; it is proxied from the score.
pub const CONFIDENCE_RATIO: f64 = 0.9;

const LIST_CAP: usize = 3;

/// One point of the recent-progress series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Positional label, e.g. "Session 7".
    pub date: String,
    pub score: i32,
    pub confidence: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakArea {
    pub area: String,
    pub score: i32,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub area: String,
    pub score: i32,
}

/// Summary fields computed from ordered session scores. Merged into the
/// final report by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub overall_score: i32,
    pub average_confidence: i32,
    pub improvement_rate: i32,
    pub progress_over_time: Vec<ProgressPoint>,
    pub weak_areas: Vec<WeakArea>,
    pub strengths: Vec<Strength>,
}

/// Build the summary. An empty `session_scores` slice is the canonical
/// "no data yet" state: all numerics 0, all lists empty.
pub fn summarize(session_scores: &[SessionScore], skill_scores: &[SkillScore]) -> Summary {
    if session_scores.is_empty() {
        return Summary::default();
    }

    let raw: Vec<f64> = session_scores.iter().map(|s| s.score).collect();
    let overall = mean(&raw);

    Summary {
        overall_score: round(overall),
        average_confidence: round(overall * CONFIDENCE_RATIO),
        improvement_rate: improvement_rate(&raw),
        progress_over_time: progress_series(session_scores),
        weak_areas: weak_areas(skill_scores),
        strengths: strengths(skill_scores),
    }
}

/// Percent change of the second-half average over the first-half average,
/// floored at 0. A half with no elements averages to 0, never faults.
fn improvement_rate(scores: &[f64]) -> i32 {
    let mid = scores.len() / 2;
    let first = mean(&scores[..mid]);
    let second = mean(&scores[mid..]);

    let rate = if first > 0.0 {
        round((second - first) / first * 100.0)
    } else {
        0
    };
    rate.max(0)
}

/// Last `PROGRESS_WINDOW` sessions, labeled by their position relative to
/// the total count.
fn progress_series(session_scores: &[SessionScore]) -> Vec<ProgressPoint> {
    let n = session_scores.len();
    let start = n.saturating_sub(PROGRESS_WINDOW);

    session_scores[start..]
        .iter()
        .enumerate()
        .map(|(i, s)| ProgressPoint {
            date: format!("Session {}", n as i64 - 4 + i as i64),
            score: round(s.score),
            confidence: round(s.score * CONFIDENCE_RATIO),
        })
        .collect()
}

fn weak_areas(skill_scores: &[SkillScore]) -> Vec<WeakArea> {
    skill_scores
        .iter()
        .filter(|s| s.score < WEAK_AREA_THRESHOLD)
        .take(LIST_CAP)
        .map(|s| WeakArea {
            area: s.skill.name().to_string(),
            score: s.score,
            feedback: improvement_advice(s.skill.name()).to_string(),
        })
        .collect()
}

fn strengths(skill_scores: &[SkillScore]) -> Vec<Strength> {
    skill_scores
        .iter()
        .filter(|s| s.score >= STRENGTH_THRESHOLD)
        .take(LIST_CAP)
        .map(|s| Strength {
            area: s.skill.name().to_string(),
            score: s.score,
        })
        .collect()
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn round(x: f64) -> i32 {
    x.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::Skill;
    use chrono::{TimeZone, Utc};

    fn score(id: &str, day: u32, score: f64) -> SessionScore {
        SessionScore {
            session_id: id.into(),
            score,
            date: Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap(),
        }
    }

    fn skill(skill: Skill, value: i32) -> SkillScore {
        SkillScore {
            skill,
            score: value,
            previous: value - 5,
            target: 85,
        }
    }

    #[test]
    fn empty_sessions_yield_canonical_zero_summary() {
        // Even with skill data present: "no sessions" wins.
        let skills = vec![skill(Skill::Communication, 90)];
        assert_eq!(summarize(&[], &skills), Summary::default());
    }

    #[test]
    fn overall_and_confidence_use_the_raw_mean() {
        let s = summarize(&[score("a", 1, 70.0), score("b", 2, 90.0)], &[]);
        assert_eq!(s.overall_score, 80);
        assert_eq!(s.average_confidence, 72); // 80 * 0.9
    }

    #[test]
    fn improvement_rate_matches_half_split() {
        // 70 vs 90: round(20/70*100) = 29
        let s = summarize(&[score("a", 1, 70.0), score("b", 2, 90.0)], &[]);
        assert_eq!(s.improvement_rate, 29);
    }

    #[test]
    fn negative_improvement_is_floored_at_zero() {
        let s = summarize(&[score("a", 1, 90.0), score("b", 2, 50.0)], &[]);
        assert_eq!(s.improvement_rate, 0);
    }

    #[test]
    fn single_session_has_zero_improvement() {
        // Midpoint 0 leaves an empty first half; its mean is 0, not a fault.
        let s = summarize(&[score("a", 1, 80.0)], &[]);
        assert_eq!(s.improvement_rate, 0);
    }

    #[test]
    fn progress_keeps_last_five_with_positional_labels() {
        let scores: Vec<SessionScore> = (1..=7)
            .map(|d| score(&format!("s{d}"), d, 50.0 + d as f64))
            .collect();
        let s = summarize(&scores, &[]);

        assert_eq!(s.progress_over_time.len(), 5);
        assert_eq!(s.progress_over_time[0].date, "Session 3");
        assert_eq!(s.progress_over_time[4].date, "Session 7");
        assert_eq!(s.progress_over_time[4].score, 57);
        assert_eq!(s.progress_over_time[4].confidence, 51); // 57 * 0.9 = 51.3
    }

    #[test]
    fn progress_is_shorter_when_fewer_sessions_exist() {
        let s = summarize(&[score("a", 1, 80.0), score("b", 2, 60.0)], &[]);
        assert_eq!(s.progress_over_time.len(), 2);
    }

    #[test]
    fn weak_and_strong_split_leaves_neutral_band_out() {
        let skills = vec![
            skill(Skill::Communication, 60),
            skill(Skill::TechnicalKnowledge, 72), // neutral band: neither list
            skill(Skill::ProblemSolving, 80),
        ];
        let s = summarize(&[score("a", 1, 70.0)], &skills);

        assert_eq!(s.weak_areas.len(), 1);
        assert_eq!(s.weak_areas[0].area, "Communication");
        assert_eq!(
            s.weak_areas[0].feedback,
            "Focus on articulating your thoughts clearly and concisely"
        );
        assert_eq!(s.strengths.len(), 1);
        assert_eq!(s.strengths[0].area, "Problem Solving");
    }

    #[test]
    fn weak_areas_and_strengths_cap_at_three() {
        let weak: Vec<SkillScore> = Skill::ALL.iter().map(|&sk| skill(sk, 40)).collect();
        let s = summarize(&[score("a", 1, 40.0)], &weak);
        assert_eq!(s.weak_areas.len(), 3);
        assert!(s.strengths.is_empty());

        let strong: Vec<SkillScore> = Skill::ALL.iter().map(|&sk| skill(sk, 90)).collect();
        let s = summarize(&[score("a", 1, 90.0)], &strong);
        assert_eq!(s.strengths.len(), 3);
        assert!(s.weak_areas.is_empty());
    }
}
