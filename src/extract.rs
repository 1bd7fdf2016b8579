//! extract.rs — Feedback Score Extraction.
//!
//! Recovers structured category scores from unstructured reviewer feedback
//! when no structured rating exists. For each category an ordered list of
//! synonym keywords is tried, and for each keyword three textual patterns in
//! order: `<kw>: N/10`, `<kw>: N%`, `<kw>: N out of 10`. The first
//! (keyword, pattern) hit wins; out-of-ten values are normalized to the
//! 0–100 scale. Absence of a stated score is a valid outcome, not an error:
//! the category simply stays 0.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured category scores recovered from feedback text. Each field is
/// 0–100; 0 means "not stated".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreMap {
    pub communication: u32,
    pub technical: u32,
    pub problem_solving: u32,
    pub confidence: u32,
    pub clarity: u32,
}

impl ScoreMap {
    /// Category values in declaration order.
    fn values(&self) -> [u32; 5] {
        [
            self.communication,
            self.technical,
            self.problem_solving,
            self.confidence,
            self.clarity,
        ]
    }
}

/// Whether a matched number is already a percentage or needs ×10 scaling.
#[derive(Debug, Clone, Copy)]
enum Scale {
    OutOfTen,
    Percent,
}

struct ScorePattern {
    re: Regex,
    scale: Scale,
}

/// Compile the ordered (keyword, pattern) pairs for one category.
/// Keyword order is significant: earlier synonyms win.
fn compile(keywords: &[&str]) -> Vec<ScorePattern> {
    // Suffixes in try-order; the separator is a colon and/or whitespace.
    const SUFFIXES: [(&str, Scale); 3] = [
        (r"[:\s]+([0-9]+)\s*/\s*10", Scale::OutOfTen),
        (r"[:\s]+([0-9]+)%", Scale::Percent),
        (r"[:\s]+([0-9]+)\s+out of\s+10", Scale::OutOfTen),
    ];

    keywords
        .iter()
        .flat_map(|kw| {
            SUFFIXES.iter().map(|(suffix, scale)| ScorePattern {
                re: Regex::new(&format!("(?i){}{}", regex::escape(kw), suffix))
                    .expect("valid score pattern"),
                scale: *scale,
            })
        })
        .collect()
}

// One compiled pattern family per category, built once per process.
static COMMUNICATION: Lazy<Vec<ScorePattern>> =
    Lazy::new(|| compile(&["communication", "speaking", "articulation", "expression"]));
static TECHNICAL: Lazy<Vec<ScorePattern>> =
    Lazy::new(|| compile(&["technical", "knowledge", "expertise", "skills"]));
static PROBLEM_SOLVING: Lazy<Vec<ScorePattern>> = Lazy::new(|| {
    compile(&["problem solving", "problem-solving", "analytical", "thinking"])
});
static CONFIDENCE: Lazy<Vec<ScorePattern>> =
    Lazy::new(|| compile(&["confidence", "assertiveness", "self-assurance"]));
static CLARITY: Lazy<Vec<ScorePattern>> =
    Lazy::new(|| compile(&["clarity", "clear", "concise", "structured"]));

/// First matching pattern wins; the value is normalized and clamped to
/// [0,100]. `None` when nothing matched.
fn extract_one(text: &str, patterns: &[ScorePattern]) -> Option<u32> {
    for p in patterns {
        if let Some(caps) = p.re.captures(text) {
            let n: u64 = caps[1].parse().unwrap_or(0);
            let scaled = match p.scale {
                Scale::OutOfTen => n.saturating_mul(10),
                Scale::Percent => n,
            };
            return Some(scaled.min(100) as u32);
        }
    }
    None
}

/// Parse a block of free-form feedback into a `ScoreMap`. Pure function;
/// unresolved categories default to 0.
pub fn extract_scores_from_feedback(feedback_text: &str) -> ScoreMap {
    ScoreMap {
        communication: extract_one(feedback_text, &COMMUNICATION).unwrap_or(0),
        technical: extract_one(feedback_text, &TECHNICAL).unwrap_or(0),
        problem_solving: extract_one(feedback_text, &PROBLEM_SOLVING).unwrap_or(0),
        confidence: extract_one(feedback_text, &CONFIDENCE).unwrap_or(0),
        clarity: extract_one(feedback_text, &CLARITY).unwrap_or(0),
    }
}

/// Rounded mean of the strictly-positive category scores. Zero-valued
/// (unresolved) categories are excluded from the denominator; an all-zero
/// map yields 0.
pub fn calculate_overall_score(scores: &ScoreMap) -> u32 {
    let positive: Vec<u32> = scores.values().into_iter().filter(|&v| v > 0).collect();
    if positive.is_empty() {
        return 0;
    }
    let sum: u32 = positive.iter().sum();
    ((sum as f64) / (positive.len() as f64)).round() as u32
}

/// Resolve the scores to persist: a caller-supplied map wins over text
/// extraction. Supplying neither is a precondition violation surfaced to
/// the caller — the only error this engine raises.
pub fn resolve_scores(
    manual_scores: Option<ScoreMap>,
    feedback_text: Option<&str>,
) -> Result<ScoreMap> {
    if let Some(scores) = manual_scores {
        return Ok(scores);
    }
    match feedback_text {
        Some(text) => Ok(extract_scores_from_feedback(text)),
        None => bail!("either a manual score map or feedback text must be provided"),
    }
}
