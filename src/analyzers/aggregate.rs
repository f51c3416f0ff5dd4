use crate::analyzers::utility::round3;
use tracing::{debug, warn};

/// Largest possible per-review term: `sqrt(5^2 * 5)`.
fn max_term() -> f64 {
    125f64.sqrt()
}

/// Folds per-review food and service ratings into a single 0–10 score.
///
/// Each review contributes `sqrt(food^2 * service)`; the sum is normalized by
/// `n * sqrt(125)`, scaled to 10 and rounded to three decimals. Returns 0.0
/// when either series is empty or the two series differ in length.
#[tracing::instrument(skip(food_scores, service_scores), fields(reviews = food_scores.len()))]
pub fn aggregate(name: &str, food_scores: &[u8], service_scores: &[u8]) -> f64 {
    if food_scores.is_empty() || service_scores.is_empty() {
        return 0.0;
    }
    if food_scores.len() != service_scores.len() {
        warn!(
            food = food_scores.len(),
            service = service_scores.len(),
            "Score series differ in length, not aggregating"
        );
        return 0.0;
    }

    let n = food_scores.len();
    let total: f64 = food_scores
        .iter()
        .zip(service_scores)
        .map(|(&food, &service)| {
            let food = f64::from(food);
            (food * food * f64::from(service)).sqrt()
        })
        .sum();

    let score = total * (1.0 / (n as f64 * max_term())) * 10.0;
    debug!(total, score, "Aggregate computed");

    round3(score)
}
