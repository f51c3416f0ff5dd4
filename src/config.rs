//! Runtime settings read from the environment.

/// Corpus location used when nothing else is configured.
pub const DEFAULT_CORPUS_PATH: &str = "restaurantes.txt";

/// Log file used when `LOG_FILE_PATH` is unset.
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/review_rater.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaterConfig {
    /// File path or `http(s)://` URL of the review corpus.
    pub corpus: String,
    pub log_file_path: String,
}

impl RaterConfig {
    /// Reads `CORPUS_PATH` and `LOG_FILE_PATH`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            corpus: lookup("CORPUS_PATH").unwrap_or_else(|| DEFAULT_CORPUS_PATH.to_string()),
            log_file_path: lookup("LOG_FILE_PATH")
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string()),
        }
    }

    /// Replaces the corpus location when `corpus` is given.
    pub fn with_corpus(mut self, corpus: Option<String>) -> Self {
        if let Some(corpus) = corpus {
            self.corpus = corpus;
        }
        self
    }
}
