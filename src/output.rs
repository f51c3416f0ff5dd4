//! Output formatting and persistence for score reports.
//!
//! Supports JSON printing and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

use crate::analyzers::utility::{mean, round3};
use crate::pipeline::PipelineState;

/// Flat summary of one pipeline run.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub timestamp: DateTime<Utc>,
    pub query: String,
    pub restaurant: String,
    pub review_count: usize,
    pub food_scores_mean: f64,
    pub service_scores_mean: f64,
    pub final_score: f64,
    pub response: String,
}

impl ScoreReport {
    pub fn from_state(state: &PipelineState) -> Self {
        ScoreReport {
            timestamp: Utc::now(),
            query: state.query().to_string(),
            restaurant: state.restaurant_name().to_string(),
            review_count: state.reviews().len(),
            food_scores_mean: round3(mean(state.food_scores())),
            service_scores_mean: round3(mean(state.service_scores())),
            final_score: state.final_score(),
            response: state.response().to_string(),
        }
    }
}

/// Prints a report to stdout as pretty-printed JSON.
pub fn print_json(report: &ScoreReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends a [`ScoreReport`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, report: &ScoreReport) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(report)?;
    writer.flush()?;

    Ok(())
}
