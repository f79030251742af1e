//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
///
/// Every message starts with the library prefix so failures are easy to
/// attribute when they surface in a larger program's logs.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Response body could not be decoded as UTF-8 text
    #[error("[gtranslate] Error decoding translation response: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    /// Connection, DNS, timeout, HTTP status or body read failure
    #[error("[gtranslate] Error retrieving translation: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The response did not contain a recognizable result container
    #[error("[gtranslate] {message}")]
    ExtractionError {
        /// What was wrong with the page
        message: String,
    },

    /// Configuration error
    #[error("[gtranslate] Configuration error: {message}")]
    ConfigError {
        /// What was wrong with the configuration
        message: String,
    },

    /// IO error
    #[error("[gtranslate] IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Wrapper for anyhow errors
    #[error("[gtranslate] Internal error: {0}")]
    InternalError(String),
}

impl TranslationError {
    pub(crate) fn extraction(message: impl Into<String>) -> Self {
        TranslationError::ExtractionError {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_carry_prefix() {
        let err = TranslationError::extraction("No translation result returned");
        assert_eq!(err.to_string(), "[gtranslate] No translation result returned");

        let err: TranslationError = anyhow::anyhow!("boom").into();
        assert!(err.to_string().starts_with("[gtranslate]"));
    }

    #[test]
    fn test_encoding_error_keeps_cause() {
        let cause = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = TranslationError::from(cause);
        assert!(err.source().is_some());
    }
}
