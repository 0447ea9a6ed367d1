use serde::{Deserialize, Serialize};

use self::capture::CaptureConfig;
use self::dictionary::DictionaryConfig;
use self::speech::SpeechConfig;
use self::translator::TranslatorConfig;

pub mod capture;
pub mod dictionary;
pub mod speech;
pub mod translator;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub speech: SpeechConfig,
    pub capture: CaptureConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            translator: TranslatorConfig::new(),
            speech: SpeechConfig::new(),
            capture: CaptureConfig::new(),
        }
    }
}
