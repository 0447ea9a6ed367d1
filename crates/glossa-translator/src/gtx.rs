use glossa_types::TargetLang;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

/// Keyless Google translate endpoint (the `client=gtx` web API).
///
/// The reply is a nested array; the translated text is the first column of
/// every row in the first array, concatenated.
#[derive(Clone)]
pub struct GtxTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GtxTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl Translator for GtxTranslator {
    async fn translate(&self, text: &str, to: TargetLang) -> Result<Translation, TranslateError> {
        // Boundary case: nothing to translate, skip the network round trip
        if text.trim().is_empty() {
            return Ok(Translation {
                text: String::new(),
                to,
                provider: "gtx".to_string(),
            });
        }

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", to.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))?;

        let translated = collect_segments(&json)?;

        Ok(Translation {
            text: translated,
            to,
            provider: "gtx".to_string(),
        })
    }

    fn supported_targets(&self) -> Vec<TargetLang> {
        TargetLang::ALL.to_vec()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google translate (gtx)".to_string(),
            requires_api_key: false,
        }
    }
}

fn collect_segments(payload: &serde_json::Value) -> Result<String, TranslateError> {
    let rows = payload
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or(TranslateError::EmptyResponse)?;

    let mut out = String::new();
    for row in rows {
        if let Some(segment) = row.get(0).and_then(|v| v.as_str()) {
            out.push_str(segment);
        }
    }

    if out.is_empty() {
        return Err(TranslateError::EmptyResponse);
    }

    Ok(out)
}
