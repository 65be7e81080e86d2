pub mod features;
pub mod scorer;

pub use features::{date_feature_sets, FeatureSet, Predicate};
pub use scorer::{
    compute_feature_scores, text_with_highest_score, ScoreOptions, ScoredText, TextScore,
};
