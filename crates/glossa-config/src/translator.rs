use std::env;

use glossa_types::TargetLang;
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_to_lang() -> TargetLang {
    TargetLang::Spanish
}

fn default_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_to_lang")]
    pub to_lang: TargetLang,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_url = env::var("TRANSLATE_API_URL").unwrap_or_else(|_| default_api_url());
        let to_lang = env::var("TRANSLATE_TO_LANG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_to_lang);

        Self {
            enabled: default_enabled(),
            to_lang,
            api_url,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            to_lang: default_to_lang(),
            api_url: default_api_url(),
        }
    }
}
