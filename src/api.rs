//! api.rs — Thin HTTP boundary over the pure engine.
//!
//! Handlers own nothing but deserialization, invoking the engine, and error
//! mapping. The engine is stateless, so the router carries no shared state;
//! each request brings its own snapshot.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::engine;
use crate::extract::{self, ScoreMap};
use crate::record::{AnswerRecord, SessionRecord};
use crate::report::PerformanceReport;

pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/performance", post(performance))
        .route("/scores/resolve", post(resolve_scores))
        .layer(CorsLayer::very_permissive())
}

/// Immutable snapshot of a user's history, fetched by the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PerformanceReq {
    answers: Vec<AnswerRecord>,
    sessions: Vec<SessionRecord>,
}

async fn performance(Json(req): Json<PerformanceReq>) -> Json<PerformanceReport> {
    // Log counts only; feedback text may contain personal detail.
    info!(
        answers = req.answers.len(),
        sessions = req.sessions.len(),
        "computing performance report"
    );
    Json(engine::compute_performance_report(&req.answers, &req.sessions))
}

/// Either a caller-supplied score map, free feedback text, or both
/// (manual scores win). Neither is a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ResolveScoresReq {
    manual_scores: Option<ScoreMap>,
    feedback_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveScoresResp {
    scores: ScoreMap,
    overall_score: u32,
}

async fn resolve_scores(
    Json(req): Json<ResolveScoresReq>,
) -> Result<Json<ResolveScoresResp>, (StatusCode, String)> {
    let scores = extract::resolve_scores(req.manual_scores, req.feedback_text.as_deref())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let overall_score = extract::calculate_overall_score(&scores);
    info!(overall_score, "resolved feedback scores");
    Ok(Json(ResolveScoresResp {
        scores,
        overall_score,
    }))
}
