//! Text Extractor — pulls plain text out of an uploaded résumé PDF.

use std::path::Path;

use thiserror::Error;

/// Failure to parse an uploaded file as a PDF (corrupt bytes, encryption,
/// unsupported structure). Always surfaced to the client as a 400; the
/// transient upload is removed by its owning scope.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ExtractionError(String);

/// Extracts the concatenated text of all pages, in page order, trimmed of
/// leading and trailing whitespace. Pages are newline-separated.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text(path).map_err(|e| ExtractionError(e.to_string()))?;
    Ok(text.trim().to_string())
}
