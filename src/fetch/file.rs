use super::source::CorpusSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct FileCorpus(PathBuf);

impl FileCorpus {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_path_buf())
    }
}

impl CorpusSource for FileCorpus {
    fn read_corpus(&self) -> Result<String> {
        std::fs::read_to_string(&self.0)
            .with_context(|| format!("failed to read corpus file {}", self.0.display()))
    }

    fn describe(&self) -> String {
        format!("file {}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_missing_file_is_error() {
        let path = env::temp_dir().join("review_rater_test_missing_corpus.txt");
        let _ = fs::remove_file(&path);

        let result = FileCorpus::new(&path).read_corpus();
        assert!(result.is_err());
    }

    #[test]
    fn test_reads_file_contents() {
        let path = env::temp_dir().join("review_rater_test_file_corpus.txt");
        fs::write(&path, "KFC. frango bom\n").unwrap();

        let content = FileCorpus::new(&path).read_corpus().unwrap();
        assert_eq!(content, "KFC. frango bom\n");

        fs::remove_file(&path).unwrap();
    }
}
