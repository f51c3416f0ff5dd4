//! State threaded through the scoring pipeline for one query.

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Pipeline progress. Transitions are strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Start,
    NameResolved,
    ReviewsFetched,
    ReviewsScored,
    AggregateComputed,
}

impl Stage {
    /// The stage that follows `self`; the terminal stage maps to itself.
    pub fn next(self) -> Self {
        match self {
            Stage::Start => Stage::NameResolved,
            Stage::NameResolved => Stage::ReviewsFetched,
            Stage::ReviewsFetched => Stage::ReviewsScored,
            Stage::ReviewsScored | Stage::AggregateComputed => Stage::AggregateComputed,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::NameResolved => "name_resolved",
            Stage::ReviewsFetched => "reviews_fetched",
            Stage::ReviewsScored => "reviews_scored",
            Stage::AggregateComputed => "aggregate_computed",
        };
        f.write_str(name)
    }
}

/// Everything one query accumulates on its way through the pipeline.
///
/// Only [`super::PipelineRunner`] mutates it; callers get read access once
/// the run finishes.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineState {
    pub(crate) stage: Stage,
    pub(crate) query: String,
    pub(crate) restaurant_name: String,
    pub(crate) reviews: Vec<String>,
    pub(crate) food_scores: Vec<u8>,
    pub(crate) service_scores: Vec<u8>,
    pub(crate) final_score: f64,
    pub(crate) response: String,
    pub(crate) trace: Vec<String>,
}

impl PipelineState {
    pub fn new(query: &str) -> Self {
        Self {
            stage: Stage::Start,
            query: query.to_string(),
            restaurant_name: String::new(),
            reviews: Vec::new(),
            food_scores: Vec::new(),
            service_scores: Vec::new(),
            final_score: 0.0,
            response: String::new(),
            trace: Vec::new(),
        }
    }

    /// Moves to the next stage and records what was done to get there.
    pub(crate) fn advance(&mut self, message: String) {
        self.stage = self.stage.next();
        debug!(stage = %self.stage, message = %message, "Pipeline transition");
        self.trace.push(message);
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    pub fn food_scores(&self) -> &[u8] {
        &self.food_scores
    }

    pub fn service_scores(&self) -> &[u8] {
        &self.service_scores
    }

    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}
