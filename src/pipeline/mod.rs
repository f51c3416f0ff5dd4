//! Linear four-stage pipeline: resolve name, fetch reviews, score, aggregate.

mod runner;
mod state;

pub use runner::PipelineRunner;
pub use state::{PipelineState, Stage};
