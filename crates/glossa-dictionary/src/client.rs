use crate::entry::WordEntry;
use crate::normalize::{DefaultNormalizer, QueryNormalizer};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("undecodable response body: {0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Look a word up.
    ///
    /// Absence is not an error: a non-success status (the API answers 404 for
    /// unknown words) or an empty entry array both come back as `Ok(None)`.
    /// Only the first entry of the response array is kept.
    pub async fn lookup(&self, word: &str) -> Result<Option<WordEntry>, DictionaryError> {
        let word = DefaultNormalizer.normalize(word);
        if word.is_empty() {
            return Ok(None);
        }

        let url = format!("{}{}", self.base_url, word);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let entries: Vec<WordEntry> = response
            .json()
            .await
            .map_err(|e| DictionaryError::Decode(e.to_string()))?;

        Ok(entries.into_iter().next())
    }
}
