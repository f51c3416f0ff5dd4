use review_rater::fetch::{CorpusSource, FileCorpus};
use review_rater::pipeline::{PipelineRunner, Stage};
use review_rater::store::ReviewStore;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/restaurantes.txt");

#[test]
fn test_full_pipeline() {
    let runner = PipelineRunner::new(FileCorpus::new(FIXTURE));
    let state = runner.run("Qual é a avaliação média do KFC?");

    assert_eq!(state.stage(), Stage::AggregateComputed);
    assert_eq!(state.restaurant_name(), "KFC");
    assert_eq!(state.reviews().len(), 3);
    assert_eq!(state.food_scores(), [4, 3, 3]);
    assert_eq!(state.service_scores(), [4, 1, 1]);
    // (sqrt(64) + sqrt(9) + sqrt(9)) / (3 * sqrt(125)) * 10
    assert_eq!(state.final_score(), 4.174);
    assert_eq!(state.response(), "A avaliação média do KFC é 4.174.");
    assert_eq!(state.trace().len(), 4);
}

#[test]
fn test_perfect_restaurant() {
    let runner = PipelineRunner::new(FileCorpus::new(FIXTURE));
    let state = runner.run("e o madero?");

    assert_eq!(state.food_scores(), [5]);
    assert_eq!(state.service_scores(), [5]);
    assert_eq!(state.final_score(), 10.0);
    assert_eq!(state.response(), "A avaliação média do Madero é 10.000.");
}

#[test]
fn test_unknown_restaurant_fails() {
    let runner = PipelineRunner::new(FileCorpus::new(FIXTURE));
    let state = runner.run("Qual a nota do Outback?");

    assert_eq!(state.restaurant_name(), "");
    assert_eq!(state.final_score(), 0.0);
    assert!(state.response().contains("não encontrado"));
}

#[test]
fn test_known_restaurant_without_reviews() {
    let runner = PipelineRunner::new(FileCorpus::new(FIXTURE));
    let state = runner.run("Como está o Bullguer?");

    assert_eq!(state.restaurant_name(), "Bullguer");
    assert!(state.reviews().is_empty());
    assert_eq!(state.final_score(), 0.0);
    assert_eq!(
        state.response(),
        "Não foi possível calcular a avaliação para Bullguer."
    );
}

#[test]
fn test_missing_corpus_yields_no_reviews() {
    let path = std::env::temp_dir().join("review_rater_integration_missing.txt");
    let _ = std::fs::remove_file(&path);

    let source = FileCorpus::new(&path);
    assert!(source.read_corpus().is_err());

    let store = ReviewStore::new(FileCorpus::new(&path));
    for name in ["KFC", "Madero", "Giraffas"] {
        assert!(store.fetch(name).is_empty());
    }
}
