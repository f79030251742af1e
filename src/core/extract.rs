//! Extraction of the translated text from the service's HTML page
//!
//! This is not an HTML parser. The page is expected to contain exactly one
//! known result container; the text between the end of its opening tag and
//! the next closing `</div>` is returned verbatim, markup included.

use crate::core::errors::{Result, TranslationError};

/// Start of the opening tag of the result container
pub const RESULT_START_MARKER: &str = "<div id=result_box dir=";

/// Closing tag that ends the result
pub const RESULT_END_MARKER: &str = "</div>";

/// Pull the translation out of a response page
pub fn extract_translation(page: &str) -> Result<String> {
    let start = page
        .find(RESULT_START_MARKER)
        .ok_or_else(|| TranslationError::extraction("No translation result returned"))?;
    let container = &page[start..];

    let open_end = container
        .find('>')
        .ok_or_else(|| TranslationError::extraction("Unterminated result container tag"))?;
    let close = container
        .find(RESULT_END_MARKER)
        .ok_or_else(|| TranslationError::extraction("Result container is never closed"))?;

    if close <= open_end {
        return Err(TranslationError::extraction("Malformed result container"));
    }

    Ok(container[open_end + 1..close].to_string())
}
