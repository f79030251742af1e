//! Supported languages and language-pair resolution

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::models::LanguagePair;

/// Language used to bridge pairs the service cannot translate directly
pub const INTERMEDIATE_LANGUAGE: &str = "en";

/// Languages offered by the translate web service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Language {
    Arabic,
    Chinese,
    ChineseSimplified,
    ChineseTraditional,
    Dutch,
    English,
    French,
    German,
    Greek,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Russian,
    Spanish,
}

impl Language {
    /// Every known language, in display order
    pub const ALL: [Language; 15] = [
        Language::Arabic,
        Language::Chinese,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Dutch,
        Language::English,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
    ];

    /// Code sent in the `langpair` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Chinese => "zh",
            Language::ChineseSimplified => "zh-CN",
            Language::ChineseTraditional => "zh-TW",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Greek => "el",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Spanish => "es",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::Chinese => "Chinese",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::ChineseTraditional => "Chinese (Traditional)",
            Language::Dutch => "Dutch",
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
        }
    }

    /// Look up a language by its exact code
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Language::from_code(s).ok_or_else(|| anyhow::anyhow!("Unsupported language code: {}", s))
    }
}

/// Pairs the service translates without going through the intermediate language
const DIRECT_PAIRS: &[(&str, &str)] = &[
    ("ar", "en"),
    ("zh", "en"),
    ("zh-CN", "zh-TW"),
    ("zh-TW", "zh-CN"),
    ("en", "ar"),
    ("en", "zh-CN"),
    ("en", "zh-TW"),
    ("en", "nl"),
    ("en", "fr"),
    ("en", "de"),
    ("en", "el"),
    ("en", "it"),
    ("en", "ja"),
    ("en", "ko"),
    ("en", "pt"),
    ("en", "ru"),
    ("en", "es"),
    ("nl", "en"),
    ("fr", "en"),
    ("fr", "de"),
    ("de", "en"),
    ("de", "fr"),
    ("el", "en"),
    ("it", "en"),
    ("ja", "en"),
    ("ko", "en"),
    ("pt", "en"),
    ("ru", "en"),
    ("es", "en"),
];

/// All direct pairs, in table order
pub fn direct_pairs() -> Vec<LanguagePair> {
    DIRECT_PAIRS
        .iter()
        .map(|(from, to)| LanguagePair::new(*from, *to))
        .collect()
}

/// Check whether `from -> to` is translated in a single request
pub fn is_directly_supported(from: &str, to: &str) -> bool {
    DIRECT_PAIRS.iter().any(|(f, t)| *f == from && *t == to)
}

/// Compute the hops needed to get from `from` to `to`
///
/// Direct pairs yield one hop. Anything else is bridged through
/// `intermediate` in two hops; the result is not checked further, so an
/// unreachable pair surfaces as a service or extraction failure later.
pub fn resolve_path(from: &str, to: &str, intermediate: &str) -> Vec<LanguagePair> {
    if is_directly_supported(from, to) {
        vec![LanguagePair::new(from, to)]
    } else {
        vec![
            LanguagePair::new(from, intermediate),
            LanguagePair::new(intermediate, to),
        ]
    }
}
