use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The seven-field settings aggregate of an index.
///
/// Every field is optional so one type serves both directions of the wire:
/// a full read (`GET .../settings`) populates all seven fields, while a
/// partial update (`POST .../settings`) serializes only the fields that are
/// set; the server merges those and leaves the rest untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Ordered ranking rules; a full replace on update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_rules: Option<Vec<String>>,
    /// Attribute used for result deduplication; absent by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_attribute: Option<String>,
    /// Absent means every field is searchable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable_attributes: Option<Vec<String>>,
    /// Absent means every field is displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed_attributes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<HashMap<String, Vec<String>>>,
    /// Whether new document fields are auto-registered as
    /// searchable/displayed at indexing time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_new_fields: Option<bool>,
}

impl Settings {
    /// An empty partial update; chain `with_*` setters to pick fields
    pub fn new() -> Self {
        Self::default()
    }

    /// The ranking rules a freshly created index applies, in order
    pub fn default_ranking_rules() -> Vec<String> {
        vec![
            "typo".to_string(),
            "words".to_string(),
            "proximity".to_string(),
            "attribute".to_string(),
            "wordsPosition".to_string(),
            "exactness".to_string(),
        ]
    }

    /// The state `reset_settings` restores: default ranking rules, no
    /// distinct attribute, all fields searchable and displayed, no stop
    /// words, no synonyms, new fields accepted.
    pub fn server_defaults() -> Self {
        Self {
            ranking_rules: Some(Self::default_ranking_rules()),
            distinct_attribute: None,
            searchable_attributes: None,
            displayed_attributes: None,
            stop_words: Some(Vec::new()),
            synonyms: Some(HashMap::new()),
            accept_new_fields: Some(true),
        }
    }

    pub fn with_ranking_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ranking_rules = Some(rules.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_distinct_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.distinct_attribute = Some(attribute.into());
        self
    }

    pub fn with_searchable_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_displayed_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.displayed_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_stop_words(mut self, words: impl Into<StopWords>) -> Self {
        self.stop_words = Some(words.into().into_vec());
        self
    }

    pub fn with_synonyms(mut self, synonyms: HashMap<String, Vec<String>>) -> Self {
        self.synonyms = Some(synonyms);
        self
    }

    pub fn with_accept_new_fields(mut self, accept: bool) -> Self {
        self.accept_new_fields = Some(accept);
        self
    }
}

/// One stop word or several.
///
/// The stop-words endpoint takes a list; a single word is coerced into a
/// one-element list at this boundary so both call shapes hit the wire the
/// same way.
#[derive(Debug, Clone)]
pub enum StopWords {
    One(String),
    Many(Vec<String>),
}

impl StopWords {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StopWords::One(word) => vec![word],
            StopWords::Many(words) => words,
        }
    }
}

impl From<&str> for StopWords {
    fn from(word: &str) -> Self {
        StopWords::One(word.to_string())
    }
}

impl From<String> for StopWords {
    fn from(word: String) -> Self {
        StopWords::One(word)
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        StopWords::Many(words)
    }
}

impl From<&[&str]> for StopWords {
    fn from(words: &[&str]) -> Self {
        StopWords::Many(words.iter().map(|w| w.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StopWords {
    fn from(words: [&str; N]) -> Self {
        StopWords::Many(words.iter().map(|w| w.to_string()).collect())
    }
}
