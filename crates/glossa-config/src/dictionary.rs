use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en/".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL the word gets appended to as a path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_api_url());

        Self { api_url }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}
