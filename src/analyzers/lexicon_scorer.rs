//! Lexicon-based extraction of food and service ratings from review text.

use crate::analyzers::types::ScorePair;
use crate::lexicon::{Lexicon, NEUTRAL_SCORE, SERVICE_KEYWORD};

/// Scores a single review against `lexicon`.
///
/// Matching is case-insensitive substring search. Everything from the first
/// [`SERVICE_KEYWORD`] onward is the service region; a token counts for food
/// when its first occurrence comes before that keyword (or there is none).
///
/// The two ratings break ties differently, and both depend on lexicon order:
/// - service takes the *first* lexicon entry found in the service region;
/// - food takes the *last* qualifying lexicon entry.
///
/// Either rating falls back to [`NEUTRAL_SCORE`] when nothing matches.
pub fn score(review: &str, lexicon: Lexicon) -> ScorePair {
    let review = review.to_lowercase();
    let service_start = review.find(SERVICE_KEYWORD);

    let service = service_start
        .and_then(|s| {
            let region = &review[s..];
            lexicon
                .iter()
                .find(|(token, _)| region.contains(token))
                .map(|&(_, score)| score)
        })
        .unwrap_or(NEUTRAL_SCORE);

    let food = lexicon
        .iter()
        .filter(|(token, _)| match (review.find(token), service_start) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(w), Some(s)) => w < s,
        })
        .last()
        .map(|&(_, score)| score)
        .unwrap_or(NEUTRAL_SCORE);

    ScorePair::new(food, service)
}
