//! skills.rs — Skill Classifier.
//!
//! Buckets each answer's rating into one or more of six fixed skill
//! categories by matching keywords in the lower-cased feedback text.
//! Membership is not exclusive: one answer may feed several categories, and
//! an answer with *empty* feedback feeds all of them, so rating-only data
//! still moves every skill average. "Body Language" has no keywords and is
//! populated only through that fallback, which keeps it near the corpus
//! baseline.

use serde::{Deserialize, Serialize};

use crate::record::AnswerRecord;

/// Target score shown next to every skill.
pub const TARGET_SCORE: i32 = 85;

/// Substitute sample when a category collected nothing.
const DEFAULT_SAMPLE: f64 = 50.0;

/// The fixed skill categories, in declaration (and output) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    Communication,
    #[serde(rename = "Technical Knowledge")]
    TechnicalKnowledge,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    Confidence,
    Clarity,
    #[serde(rename = "Body Language")]
    BodyLanguage,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Communication,
        Skill::TechnicalKnowledge,
        Skill::ProblemSolving,
        Skill::Confidence,
        Skill::Clarity,
        Skill::BodyLanguage,
    ];

    /// Display name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Skill::Communication => "Communication",
            Skill::TechnicalKnowledge => "Technical Knowledge",
            Skill::ProblemSolving => "Problem Solving",
            Skill::Confidence => "Confidence",
            Skill::Clarity => "Clarity",
            Skill::BodyLanguage => "Body Language",
        }
    }

    /// Keywords that route a piece of feedback to this category.
    /// Body Language matches nothing; see the module docs.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Skill::Communication => &["communication", "express"],
            Skill::TechnicalKnowledge => &["technical", "knowledge"],
            Skill::ProblemSolving => &["problem", "solution"],
            Skill::Confidence => &["confident", "assurance"],
            Skill::Clarity => &["clear", "concise"],
            Skill::BodyLanguage => &[],
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Current/previous/target score for one skill category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub skill: Skill,
    pub score: i32,
    pub previous: i32,
    pub target: i32,
}

/// Classify answers into per-skill scores. Always returns exactly one entry
/// per category, in declaration order, even for an empty answer list.
pub fn classify(answers: &[AnswerRecord]) -> Vec<SkillScore> {
    let mut samples: [Vec<f64>; 6] = Default::default();

    for a in answers {
        let score = a.score();
        let feedback = a.feedback.to_lowercase();

        if feedback.is_empty() {
            // Rating-only answer: counts toward every category.
            for bucket in samples.iter_mut() {
                bucket.push(score);
            }
            continue;
        }

        for (bucket, skill) in samples.iter_mut().zip(Skill::ALL) {
            if skill.keywords().iter().any(|kw| feedback.contains(kw)) {
                bucket.push(score);
            }
        }
    }

    samples
        .iter()
        .zip(Skill::ALL)
        .map(|(collected, skill)| {
            let samples: &[f64] = if collected.is_empty() {
                &[DEFAULT_SAMPLE]
            } else {
                collected
            };
            let score = round(mean(samples));
            // "Previous" is a temporal proxy: the same average with the most
            // recent sample removed.
            let previous = if samples.len() > 1 {
                round(mean(&samples[..samples.len() - 1]))
            } else {
                score - 5
            };
            SkillScore {
                skill,
                score,
                previous,
                target: TARGET_SCORE,
            }
        })
        .collect()
}

/// Static improvement advice attached to weak areas, keyed by skill name.
/// The fallback arm covers unrecognized names; it should not fire for the
/// fixed skill set.
pub fn improvement_advice(area: &str) -> &'static str {
    match area {
        "Communication" => "Focus on articulating your thoughts clearly and concisely",
        "Technical Knowledge" => "Deepen your understanding of core technical concepts",
        "Problem Solving" => "Practice breaking down complex problems systematically",
        "Confidence" => "Build confidence through more practice interviews",
        "Clarity" => "Work on structuring your answers using frameworks like STAR",
        "Body Language" => "Practice maintaining eye contact and confident posture",
        _ => "Continue practicing to improve this area",
    }
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
