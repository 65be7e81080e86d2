//! Feature scorer, the one classification primitive behind every field extractor.
//!
//! Algorithm:
//! 1. Every candidate starts at 0 and gains the weight of each feature set whose
//!    predicate holds for it.
//! 2. A `match_only` feature whose match is narrower than the candidate adds a derived
//!    candidate holding just the matched span (appended after the originals).
//! 3. The highest total wins; ties go to the earliest candidate.
//! 4. A winning score ≤ 0 yields `""` unless `fallback` is set.

use serde::Serialize;

use crate::models::TextItem;
use crate::scoring::features::FeatureSet;

/// Score of one candidate text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextScore {
    pub text: String,
    pub score: i32,
    /// Set when a `match_only` feature credited this candidate.
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreOptions {
    /// Return the best guess even when no candidate scores above zero.
    pub fallback: bool,
    /// Join every top-scoring text with a space instead of taking the first.
    pub concatenate_ties: bool,
}

impl ScoreOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn with_fallback() -> Self {
        Self {
            fallback: true,
            ..Self::default()
        }
    }
}

/// The selected text plus every candidate's score, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredText {
    pub text: String,
    pub scores: Vec<TextScore>,
}

pub fn compute_feature_scores(items: &[TextItem], features: &[FeatureSet]) -> Vec<TextScore> {
    let mut scores: Vec<TextScore> = items
        .iter()
        .map(|item| TextScore {
            text: item.text.clone(),
            score: 0,
            matched: false,
        })
        .collect();
    let mut derived: Vec<TextScore> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        for feature in features {
            let Some(matched) = feature.predicate.evaluate(item) else {
                continue;
            };
            if feature.match_only && matched != item.text {
                derived.push(TextScore {
                    text: matched.to_string(),
                    score: feature.weight,
                    matched: true,
                });
            } else {
                scores[index].score += feature.weight;
                scores[index].matched |= feature.match_only;
            }
        }
    }

    scores.extend(derived);
    scores
}

/// Picks the candidate text with the highest feature score.
///
/// # Panics
/// In debug builds, when `features` has no positive weight: such a table can never
/// select anything and is a configuration defect.
pub fn text_with_highest_score(
    items: &[TextItem],
    features: &[FeatureSet],
    options: ScoreOptions,
) -> ScoredText {
    debug_assert!(
        features.iter().any(|f| f.weight > 0),
        "feature table has no positive weight"
    );

    let scores = compute_feature_scores(items, features);
    let text = match scores.iter().map(|s| s.score).max() {
        None => String::new(),
        Some(best) if best <= 0 && !options.fallback => String::new(),
        Some(best) => {
            let mut top = scores.iter().filter(|s| s.score == best);
            if options.concatenate_ties {
                top.map(|s| s.text.trim())
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                top.next().map(|s| s.text.clone()).unwrap_or_default()
            }
        }
    };

    ScoredText { text, scores }
}
