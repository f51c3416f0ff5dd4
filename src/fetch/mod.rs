//! Corpus retrieval.
//!
//! [`CorpusSource`] is the seam between the review store and wherever the
//! raw corpus lives. [`FileCorpus`] reads a local file and [`HttpCorpus`]
//! downloads it with a blocking HTTP GET.

mod file;
mod http;
mod source;

pub use file::FileCorpus;
pub use http::HttpCorpus;
pub use source::CorpusSource;

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn corpus_from(location: &str) -> Box<dyn CorpusSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpCorpus::new(location))
    } else {
        Box::new(FileCorpus::new(location))
    }
}
