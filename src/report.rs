//! report.rs — The performance report returned to the caller.
//!
//! This is the shape the dashboard consumes; the JSON field names are part
//! of the contract and must not drift. The report is ephemeral: recomputed
//! from scratch on every request, never persisted by this engine.

use serde::{Deserialize, Serialize};

use crate::skills::SkillScore;
use crate::trend::{ProgressPoint, Strength, WeakArea};

/// Structured performance profile derived from a user's answer history.
///
/// `Default` is the canonical "no data yet" state: all numerics 0, all lists
/// empty (including `skillScores` — distinct from the per-skill default-50
/// entries produced once any answer exists).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub overall_score: i32,
    pub interviews_taken: i32,
    pub average_confidence: i32,
    pub improvement_rate: i32,
    pub skill_scores: Vec<SkillScore>,
    pub progress_over_time: Vec<ProgressPoint>,
    pub weak_areas: Vec<WeakArea>,
    pub strengths: Vec<Strength>,
}
