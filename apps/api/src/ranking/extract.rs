//! PDF text extraction over raw uploaded bytes.
//!
//! No layout awareness and no OCR; a document that `pdf-extract` cannot
//! parse is a client error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not parse PDF: {0}")]
    Malformed(String),
}

/// Extracts the concatenated page text from a PDF, trimmed.
/// Pages are newline-joined by the extractor itself.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Malformed(e.to_string()))?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_bytes_rejected() {
        let result = extract_text(b"this is definitely not a pdf");
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = extract_text(b"");
        assert!(result.is_err());
    }

    #[test]
    fn test_truncated_header_rejected() {
        // A bare PDF magic number with no body is not a readable document.
        let result = extract_text(b"%PDF-1.7\n");
        assert!(result.is_err());
    }
}
