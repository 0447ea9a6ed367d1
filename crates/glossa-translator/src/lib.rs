use glossa_types::TargetLang;

pub mod gtx;

pub use gtx::GtxTranslator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate English text into the target language
    async fn translate(&self, text: &str, to: TargetLang) -> Result<Translation, TranslateError>;

    /// Targets this provider accepts
    fn supported_targets(&self) -> Vec<TargetLang>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub to: TargetLang,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("No translation in response")]
    EmptyResponse,
}
