use unicode_normalization::UnicodeNormalization;

pub trait QueryNormalizer {
    // Default English query cleanup
    fn normalize(&self, word: &str) -> String {
        let mut word = word.trim().to_string();

        if word.is_empty() {
            return word;
        }

        // Unicode normalization (NFKC)
        word = word.nfkc().collect();

        // Transcribed input may carry newlines
        word = word.replace(['\n', '\r'], " ").trim().to_string();

        word
    }
}

pub struct DefaultNormalizer;
impl QueryNormalizer for DefaultNormalizer {}
