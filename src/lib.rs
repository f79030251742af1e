//! gtranslate - client for the Google Translate web page
//!
//! Translates text by requesting the public translate page and extracting
//! the result from the returned HTML. Requests are spaced by a shared rate
//! limiter, and language pairs the service cannot handle directly are
//! bridged through English.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::GoogleTranslator,
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    language::{is_directly_supported, resolve_path, Language, INTERMEDIATE_LANGUAGE},
    models::{LanguagePair, TranslationRequest, TranslationResult},
    rate_limiter::{RateLimiter, RATE_DELAY},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
