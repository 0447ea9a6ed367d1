use std::env;

use serde::{Deserialize, Serialize};

fn default_stt_url() -> String {
    "http://localhost:8770/v1/transcribe".to_string()
}

fn default_language_hint() -> String {
    "en-US".to_string()
}

fn default_tts_command() -> String {
    "espeak-ng".to_string()
}

fn default_speak_on_lookup() -> bool {
    false
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    /// Remote speech-to-text endpoint
    #[serde(default = "default_stt_url")]
    pub stt_url: String,
    #[serde(default = "default_language_hint")]
    pub language_hint: String,
    /// Local synthesizer binary
    #[serde(default = "default_tts_command")]
    pub tts_command: String,
    #[serde(default = "default_speak_on_lookup")]
    pub speak_on_lookup: bool,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let stt_url = env::var("STT_URL").unwrap_or_else(|_| default_stt_url());
        let language_hint = env::var("STT_LANGUAGE").unwrap_or_else(|_| default_language_hint());
        let tts_command = env::var("TTS_COMMAND").unwrap_or_else(|_| default_tts_command());

        Self {
            stt_url,
            language_hint,
            tts_command,
            speak_on_lookup: default_speak_on_lookup(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            stt_url: default_stt_url(),
            language_hint: default_language_hint(),
            tts_command: default_tts_command(),
            speak_on_lookup: default_speak_on_lookup(),
        }
    }
}
