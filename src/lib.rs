// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod engine;
pub mod extract;
pub mod record;
pub mod report;
pub mod sessions;
pub mod skills;
pub mod trend;

// ---- Re-exports for stable public API ----
pub use crate::api::create_router;
pub use crate::engine::compute_performance_report;
pub use crate::extract::{calculate_overall_score, extract_scores_from_feedback, resolve_scores, ScoreMap};
pub use crate::record::{AnswerRecord, SessionRecord};
pub use crate::report::PerformanceReport;
pub use crate::skills::{Skill, SkillScore};
