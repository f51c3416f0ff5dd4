//! Data types used by the scoring stages.

use serde::Serialize;

/// Food and service ratings (1–5) inferred from a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScorePair {
    pub food: u8,
    pub service: u8,
}

impl ScorePair {
    pub fn new(food: u8, service: u8) -> Self {
        Self { food, service }
    }
}
