use serde::Deserialize;

/// One dictionary entry as returned by the entries API.
///
/// The API returns an array of these; only the first element is ever used.
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl WordEntry {
    /// Canonical meaning: the first definition of the first meaning
    pub fn meaning(&self) -> Option<&str> {
        self.meanings
            .first()
            .and_then(|m| m.definitions.first())
            .map(|d| d.definition.as_str())
    }

    pub fn part_of_speech(&self) -> Option<&str> {
        self.meanings.first().map(|m| m.part_of_speech.as_str())
    }

    /// Example sentences across the first meaning's definitions, in order
    pub fn examples(&self) -> Vec<&str> {
        let Some(meaning) = self.meanings.first() else {
            return Vec::new();
        };

        meaning
            .definitions
            .iter()
            .filter_map(|d| d.example.as_deref())
            .collect()
    }

    /// Definition-level synonyms collected from the first meaning
    pub fn synonyms(&self) -> Vec<String> {
        self.collect_related(|d| &d.synonyms)
    }

    /// Definition-level antonyms collected from the first meaning
    pub fn antonyms(&self) -> Vec<String> {
        self.collect_related(|d| &d.antonyms)
    }

    fn collect_related<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Definition) -> &Vec<String>,
    {
        let Some(meaning) = self.meanings.first() else {
            return Vec::new();
        };

        meaning
            .definitions
            .iter()
            .flat_map(|d| field(d).iter().cloned())
            .collect()
    }
}
