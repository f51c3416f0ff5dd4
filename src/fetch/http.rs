use super::source::CorpusSource;
use anyhow::Result;

pub struct HttpCorpus {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpCorpus {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl CorpusSource for HttpCorpus {
    fn read_corpus(&self) -> Result<String> {
        let resp = self.client.get(&self.url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
