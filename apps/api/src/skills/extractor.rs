//! Keyword skill extraction — turns free text into a ranked, confidence-scored
//! set of taxonomy skills.
//!
//! Algorithm:
//! 1. Lowercase the text.
//! 2. For every taxonomy keyword count word-bounded occurrences; phrases weigh 2,
//!    single tokens weigh 1. The sum per skill is its raw score.
//! 3. value = round((0.2 + 0.8 × ln(raw + 1) / ln(max + 1)) × 100), max floored at 1
//! 4. Sort by value descending, then by name ascending.
//! 5. confidence = round((0.3 × length + 0.4 × breadth + 0.3 × depth) × 100) / 100,
//!    capped at 0.95.
//!
//! Pure and synchronous. No input is an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::skills::matcher::compiled_entries;
use crate::skills::taxonomy::Category;

/// Confidence is never reported above this.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Every matched skill gets at least this share of the scale.
const VALUE_FLOOR: f64 = 0.2;
/// Share of the scale distributed by log-scaled evidence.
const VALUE_SPAN: f64 = 0.8;
/// Input length (UTF-16 code units) at which the length factor saturates.
const LENGTH_SATURATION: f64 = 1000.0;
/// Distinct skills at which the match factor saturates.
const MATCH_SATURATION: f64 = 10.0;

/// Weights of the three confidence signals.
#[derive(Debug, Clone, Copy)]
struct ConfidenceWeights {
    length: f64,
    matches: f64,
    score: f64,
}

const CONFIDENCE_WEIGHTS: ConfidenceWeights = ConfidenceWeights {
    length: 0.3,
    matches: 0.4,
    score: 0.3,
};

/// A skill in an extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0 – 100, relative salience within this extraction
    pub value: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Output of an extraction: skills ordered by value, plus overall confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub skills: Vec<Skill>,
    /// 0.0 – 0.95
    pub confidence: f64,
}

/// Per-skill accumulator built during the matching pass.
#[derive(Debug, Clone)]
pub(crate) struct SkillMatch {
    pub name: &'static str,
    pub matched_keywords: Vec<&'static str>,
    pub raw_score: u32,
    pub category: Category,
}

/// Extracts taxonomy skills from `text`.
pub fn extract_skills(text: &str) -> ExtractionResult {
    if text.trim().is_empty() {
        return ExtractionResult::default();
    }

    let normalized = text.to_lowercase();
    let matches = match_skills(&normalized);

    for m in &matches {
        trace!(
            "{} ({:?}): raw score {} from {:?}",
            m.name,
            m.category,
            m.raw_score,
            m.matched_keywords
        );
    }

    let max_score = matches.iter().map(|m| m.raw_score).max().unwrap_or(0).max(1);

    let mut skills: Vec<Skill> = matches
        .iter()
        .map(|m| Skill {
            name: m.name.to_string(),
            value: proficiency_value(m.raw_score, max_score),
            category: Some(m.category),
        })
        .collect();
    rank_skills(&mut skills);

    let values: Vec<u8> = skills.iter().map(|s| s.value).collect();
    let confidence = compute_confidence(text.encode_utf16().count(), &values);

    debug!(
        "Keyword extraction: {} skills matched, max raw score {}, confidence {:.2}",
        skills.len(),
        max_score,
        confidence
    );

    ExtractionResult { skills, confidence }
}

/// Runs every compiled keyword against already-lowercased text.
pub(crate) fn match_skills(normalized: &str) -> Vec<SkillMatch> {
    let mut matches = Vec::new();

    for compiled in compiled_entries() {
        let mut matched_keywords = Vec::new();
        let mut raw_score = 0;

        for matcher in &compiled.matchers {
            let count = matcher.occurrences(normalized);
            if count > 0 {
                matched_keywords.push(matcher.keyword());
                raw_score += count * matcher.weight();
            }
        }

        if !matched_keywords.is_empty() {
            matches.push(SkillMatch {
                name: compiled.entry.name,
                matched_keywords,
                raw_score,
                category: compiled.entry.category,
            });
        }
    }

    matches
}

/// Log-scaled mapping of a raw score onto 20–100 relative to the best skill.
pub(crate) fn proficiency_value(raw_score: u32, max_score: u32) -> u8 {
    let max_score = max_score.max(1);
    let ratio = (raw_score as f64 + 1.0).ln() / (max_score as f64 + 1.0).ln();
    let value = ((VALUE_FLOOR + VALUE_SPAN * ratio) * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}

/// Value descending; equal values by name ascending so table order never leaks.
pub(crate) fn rank_skills(skills: &mut [Skill]) {
    skills.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
}

/// Overall confidence from input length, breadth of matches and their average value.
/// `text_len` is measured in UTF-16 code units, so an emoji counts twice.
pub(crate) fn compute_confidence(text_len: usize, values: &[u8]) -> f64 {
    let n = values.len();
    let avg = if n == 0 {
        0.0
    } else {
        values.iter().map(|&v| v as f64).sum::<f64>() / n as f64
    };

    let length_factor = (text_len as f64 / LENGTH_SATURATION).min(1.0);
    let match_factor = (n as f64 / MATCH_SATURATION).min(1.0);
    let score_factor = avg / 100.0;

    let w = CONFIDENCE_WEIGHTS;
    let raw = w.length * length_factor + w.matches * match_factor + w.score * score_factor;
    let confidence = (raw * 100.0).round() / 100.0;
    confidence.clamp(0.0, MAX_CONFIDENCE)
}
