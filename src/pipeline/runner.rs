use crate::analyzers::aggregate::aggregate;
use crate::analyzers::lexicon_scorer::score;
use crate::fetch::CorpusSource;
use crate::lexicon::{LEXICON, Lexicon};
use crate::pipeline::state::PipelineState;
use crate::resolver::{KNOWN_RESTAURANTS, resolve};
use crate::store::ReviewStore;
use tracing::info;

/// Response used when the query names no known restaurant.
pub const NOT_FOUND_RESPONSE: &str =
    "Restaurante não encontrado na consulta: não foi possível calcular a avaliação.";

/// Owns the collaborators of each stage and drives one [`PipelineState`]
/// through them in order.
pub struct PipelineRunner<S> {
    store: ReviewStore<S>,
    registry: &'static [&'static str],
    lexicon: Lexicon,
}

impl<S: CorpusSource> PipelineRunner<S> {
    /// Runner over the built-in registry and lexicon.
    pub fn new(source: S) -> Self {
        Self::with_tables(source, KNOWN_RESTAURANTS, LEXICON)
    }

    pub fn with_tables(
        source: S,
        registry: &'static [&'static str],
        lexicon: Lexicon,
    ) -> Self {
        Self {
            store: ReviewStore::new(source),
            registry,
            lexicon,
        }
    }

    /// Runs every stage for `query` and returns the terminal state.
    #[tracing::instrument(skip(self))]
    pub fn run(&self, query: &str) -> PipelineState {
        let state = PipelineState::new(query);
        let state = self.resolve_name(state);
        let state = self.fetch_reviews(state);
        let state = self.score_reviews(state);
        let state = self.compute_aggregate(state);

        info!(
            restaurant = %state.restaurant_name,
            reviews = state.reviews.len(),
            final_score = state.final_score,
            "Pipeline finished"
        );
        state
    }

    fn resolve_name(&self, mut state: PipelineState) -> PipelineState {
        state.restaurant_name = resolve(&state.query, self.registry);

        if state.restaurant_name.is_empty() {
            state.reviews.clear();
            state.food_scores.clear();
            state.service_scores.clear();
            state.response = NOT_FOUND_RESPONSE.to_string();
        }

        let message = format!("Restaurante identificado: {}", state.restaurant_name);
        state.advance(message);
        state
    }

    fn fetch_reviews(&self, mut state: PipelineState) -> PipelineState {
        let message = if state.restaurant_name.is_empty() {
            "Restaurante não encontrado".to_string()
        } else {
            state.reviews = self.store.fetch(&state.restaurant_name);
            format!(
                "Encontradas {} avaliações para {}",
                state.reviews.len(),
                state.restaurant_name
            )
        };

        state.advance(message);
        state
    }

    fn score_reviews(&self, mut state: PipelineState) -> PipelineState {
        let (food, service): (Vec<u8>, Vec<u8>) = state
            .reviews
            .iter()
            .map(|review| score(review, self.lexicon))
            .map(|pair| (pair.food, pair.service))
            .unzip();
        state.food_scores = food;
        state.service_scores = service;

        let message = format!(
            "Análise concluída: {} scores extraídos",
            state.food_scores.len()
        );
        state.advance(message);
        state
    }

    fn compute_aggregate(&self, mut state: PipelineState) -> PipelineState {
        let message = if state.food_scores.is_empty() || state.service_scores.is_empty() {
            state.final_score = 0.0;
            if state.response.is_empty() {
                state.response = format!(
                    "Não foi possível calcular a avaliação para {}.",
                    state.restaurant_name
                );
            }
            "Score final não calculado: nenhuma avaliação pontuada".to_string()
        } else {
            state.final_score = aggregate(
                &state.restaurant_name,
                &state.food_scores,
                &state.service_scores,
            );
            state.response = format!(
                "A avaliação média do {} é {:.3}.",
                state.restaurant_name, state.final_score
            );
            format!("Score final calculado: {:.3}", state.final_score)
        };

        state.advance(message);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Stage;
    use anyhow::{Result, anyhow};

    struct InMemory(Option<&'static str>);

    impl CorpusSource for InMemory {
        fn read_corpus(&self) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| anyhow!("no corpus"))
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn test_unknown_restaurant() {
        let runner = PipelineRunner::new(InMemory(Some("KFC. frango bom\n")));
        let state = runner.run("qual a nota do Outback?");

        assert_eq!(state.stage(), Stage::AggregateComputed);
        assert_eq!(state.restaurant_name(), "");
        assert!(state.reviews().is_empty());
        assert_eq!(state.final_score(), 0.0);
        assert_eq!(state.response(), NOT_FOUND_RESPONSE);
        assert_eq!(
            state.trace(),
            [
                "Restaurante identificado: ",
                "Restaurante não encontrado",
                "Análise concluída: 0 scores extraídos",
                "Score final não calculado: nenhuma avaliação pontuada",
            ]
        );
    }

    #[test]
    fn test_single_bad_service_review() {
        let runner = PipelineRunner::new(InMemory(Some("KFC. atendimento horrível\n")));
        let state = runner.run("Como está o KFC?");

        assert_eq!(state.restaurant_name(), "KFC");
        assert_eq!(state.reviews(), ["atendimento horrível"]);
        assert_eq!(state.food_scores(), [3]);
        assert_eq!(state.service_scores(), [1]);
        assert_eq!(state.final_score(), 2.683);
        assert_eq!(state.response(), "A avaliação média do KFC é 2.683.");
        assert_eq!(state.trace().len(), 4);
        assert_eq!(state.trace()[3], "Score final calculado: 2.683");
    }

    #[test]
    fn test_resolved_without_reviews() {
        let runner = PipelineRunner::new(InMemory(Some("Madero. hambúrguer bom\n")));
        let state = runner.run("kfc");

        assert_eq!(state.restaurant_name(), "KFC");
        assert_eq!(state.final_score(), 0.0);
        assert_eq!(
            state.response(),
            "Não foi possível calcular a avaliação para KFC."
        );
        assert_eq!(state.trace()[1], "Encontradas 0 avaliações para KFC");
    }

    #[test]
    fn test_corpus_unavailable_degrades() {
        let runner = PipelineRunner::new(InMemory(None));
        let state = runner.run("Madero");

        assert_eq!(state.restaurant_name(), "Madero");
        assert!(state.reviews().is_empty());
        assert_eq!(state.final_score(), 0.0);
        assert_eq!(
            state.response(),
            "Não foi possível calcular a avaliação para Madero."
        );
    }

    #[test]
    fn test_scores_parallel_reviews() {
        let corpus = "Giraffas. comida boa, atendimento eficiente\n\
                      Giraffas. prato sem graça\n\
                      Giraffas. atendimento incrível\n";
        let runner = PipelineRunner::new(InMemory(Some(corpus)));
        let state = runner.run("giraffas");

        assert_eq!(state.reviews().len(), 3);
        assert_eq!(state.food_scores(), [4, 3, 3]);
        assert_eq!(state.service_scores(), [4, 3, 5]);
        // (sqrt(64) + sqrt(27) + sqrt(45)) / (3 * sqrt(125)) * 10
        assert_eq!(state.final_score(), 5.934);
        assert_eq!(state.response(), "A avaliação média do Giraffas é 5.934.");
    }

    #[test]
    fn test_custom_registry() {
        static REGISTRY: &[&str] = &["Cantina"];
        let source = InMemory(Some("Cantina. massa incrível\n"));
        let runner = PipelineRunner::with_tables(source, REGISTRY, LEXICON);
        let state = runner.run("e a cantina?");

        assert_eq!(state.restaurant_name(), "Cantina");
        assert_eq!(state.food_scores(), [5]);
        assert_eq!(state.service_scores(), [3]);
    }
}
