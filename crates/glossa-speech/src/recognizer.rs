use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audio::AudioClip;

/// Speech-to-text provider interface
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Transcribe an accumulated mono clip
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, RecognizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizeError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Recognizer could not understand the audio")]
    NoSpeech,
}

#[derive(Serialize)]
struct TranscribeRequest<'a> {
    samples: &'a [i16],
    sample_rate_hz: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_hint: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
}

#[derive(Deserialize)]
struct TranscribeResponse {
    text: String,
}

/// Remote recognizer speaking a small JSON transcription API
#[derive(Clone)]
pub struct HttpRecognizer {
    client: reqwest::Client,
    url: String,
    language_hint: Option<String>,
    session_id: Option<Uuid>,
}

impl HttpRecognizer {
    pub fn new(url: String, language_hint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            language_hint,
            session_id: None,
        }
    }

    /// Tag subsequent requests with a capture session id
    pub fn with_session(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

#[async_trait::async_trait]
impl Recognizer for HttpRecognizer {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, RecognizeError> {
        if clip.is_empty() {
            return Err(RecognizeError::NoSpeech);
        }

        let request = TranscribeRequest {
            samples: clip.samples(),
            sample_rate_hz: clip.sample_rate(),
            language_hint: self.language_hint.as_deref(),
            session_id: self.session_id.map(|id| id.to_string()),
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(RecognizeError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: TranscribeResponse = response
            .json()
            .await
            .map_err(|e| RecognizeError::ApiError(format!("Failed to parse response: {}", e)))?;

        if body.text.trim().is_empty() {
            return Err(RecognizeError::NoSpeech);
        }

        Ok(body.text)
    }
}
