//! CLI entry point for the restaurant review rater.
//!
//! Resolves the restaurant named in a free-text query, scores its reviews
//! from the corpus and prints a single response line.

use anyhow::Result;
use clap::Parser;
use review_rater::{
    config::RaterConfig,
    fetch::corpus_from,
    output::{ScoreReport, append_record, print_json},
    pipeline::PipelineRunner,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "review_rater")]
#[command(about = "Scores a restaurant from its free-text reviews", long_about = None)]
struct Cli {
    /// Free-text question naming a restaurant, e.g. "Qual a avaliação do KFC?"
    #[arg(value_name = "QUERY")]
    query: String,

    /// Corpus file or URL (overrides CORPUS_PATH)
    #[arg(short, long, value_name = "PATH_OR_URL")]
    corpus: Option<String>,

    /// CSV file to append the score report to
    #[arg(short, long)]
    output: Option<String>,

    /// Print the full report as JSON instead of the response line
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let config = RaterConfig::from_env().with_corpus(cli.corpus);

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&config.log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&config.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("review_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    info!(corpus = %config.corpus, "Starting review rater");

    let runner = PipelineRunner::new(corpus_from(&config.corpus));
    let state = runner.run(&cli.query);
    let report = ScoreReport::from_state(&state);

    if let Some(output) = &cli.output {
        append_record(output, &report)?;
        info!(output = %output, "Report appended");
    }

    if cli.json {
        print_json(&report)?;
    } else {
        println!("{}", state.response());
    }

    Ok(())
}
