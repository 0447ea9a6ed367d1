use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    WordInput {
        text: String,
        source: TextSource,
    },
    ShowReport(WordReport),
    NoEntry {
        word: String,
    },
    ShowTranslation {
        text: String,
        to_lang: TargetLang,
    },
    CaptureStatus {
        status: String,
        listening: bool,
    },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Typed,
    Voice,
}

/// Everything the renderer needs for one looked-up word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub word: String,
    pub part_of_speech: String,
    pub meaning: String,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Translation targets the translator provider accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLang {
    Spanish,
    French,
    German,
    ChineseSimplified,
    Hindi,
}

impl TargetLang {
    pub const ALL: [TargetLang; 5] = [
        TargetLang::Spanish,
        TargetLang::French,
        TargetLang::German,
        TargetLang::ChineseSimplified,
        TargetLang::Hindi,
    ];

    /// ISO code understood by the translation endpoint
    pub fn code(&self) -> &'static str {
        match self {
            TargetLang::Spanish => "es",
            TargetLang::French => "fr",
            TargetLang::German => "de",
            TargetLang::ChineseSimplified => "zh-cn",
            TargetLang::Hindi => "hi",
        }
    }
}

impl fmt::Display for TargetLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target language code: {0}")]
pub struct UnknownLangCode(pub String);

impl FromStr for TargetLang {
    type Err = UnknownLangCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or(UnknownLangCode(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_lang_round_trips_through_codes() {
        for lang in TargetLang::ALL {
            assert_eq!(lang.code().parse::<TargetLang>().unwrap(), lang);
        }
    }

    #[test]
    fn target_lang_rejects_unlisted_codes() {
        assert!("en".parse::<TargetLang>().is_err());
        assert!("".parse::<TargetLang>().is_err());
    }

    #[test]
    fn target_lang_parse_is_case_insensitive() {
        assert_eq!("ZH-CN".parse::<TargetLang>().unwrap(), TargetLang::ChineseSimplified);
    }
}
