//! Review scoring and aggregation.
//!
//! [`lexicon_scorer`] turns one review into a food/service [`types::ScorePair`],
//! and [`aggregate`] folds all pairs for a restaurant into its final score.

pub mod aggregate;
pub mod lexicon_scorer;
pub mod types;
pub mod utility;
