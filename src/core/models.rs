//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source and target language codes for one request to the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Source language code
    pub from: String,
    /// Target language code
    pub to: String,
}

impl LanguagePair {
    /// Create a pair from two codes
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.from, self.to)
    }
}

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Source language code
    pub from: String,
    /// Target language code
    pub to: String,
}

impl TranslationRequest {
    /// Create a request
    pub fn new(text: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Translation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Translated text, as extracted from the page
    pub translation: String,
    /// Hops actually requested, in order
    pub path: Vec<LanguagePair>,
    /// When the last hop completed
    pub translated_at: chrono::DateTime<chrono::Utc>,
}

impl TranslationResult {
    /// Create a result stamped with the current time
    pub fn new(translation: String, path: Vec<LanguagePair>) -> Self {
        Self {
            translation,
            path,
            translated_at: chrono::Utc::now(),
        }
    }

    /// True when the text went through the intermediate language
    pub fn is_bridged(&self) -> bool {
        self.path.len() > 1
    }
}
