//! Review retrieval from a flat `<Name>. <review>` corpus.

use crate::fetch::CorpusSource;
use tracing::{debug, warn};

/// Loads the reviews belonging to one restaurant from a [`CorpusSource`].
pub struct ReviewStore<S> {
    source: S,
}

impl<S: CorpusSource> ReviewStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns every review line recorded for `restaurant_name`, in corpus order.
    ///
    /// An empty name short-circuits without touching the corpus. An
    /// unavailable corpus is logged and treated as having no reviews.
    #[tracing::instrument(skip(self), fields(corpus = %self.source.describe()))]
    pub fn fetch(&self, restaurant_name: &str) -> Vec<String> {
        if restaurant_name.is_empty() {
            return Vec::new();
        }

        match self.source.read_corpus() {
            Ok(corpus) => {
                let reviews = filter_reviews(&corpus, restaurant_name);
                debug!(reviews = reviews.len(), "Corpus filtered");
                reviews
            }
            Err(e) => {
                warn!(error = %e, "Corpus unavailable, continuing with no reviews");
                Vec::new()
            }
        }
    }
}

/// Extracts the review text of every line starting with `restaurant_name.`
///
/// Matching is case-sensitive and exact. `\n`, `\r\n` and a lone `\r` all end
/// a line. The text after the name skips the period and the separating space
/// before trimming.
pub fn filter_reviews(corpus: &str, restaurant_name: &str) -> Vec<String> {
    let prefix = format!("{restaurant_name}.");

    corpus
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| line.starts_with(&prefix))
        .map(|line| {
            let mut rest = line[restaurant_name.len()..].chars();
            rest.next();
            rest.next();
            rest.as_str().trim().to_string()
        })
        .collect()
}
