//! PDF text extraction using pdf-extract
//! Handles CID fonts and ToUnicode CMaps properly

use crate::ExtractionError;

/// Extract text from all pages of a PDF
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| {
        let error_str = e.to_string();

        // Known encoding failures
        if error_str.contains("Identity-H") || error_str.contains("Unimplemented") {
            ExtractionError::Encoding {
                details: error_str,
            }
        } else {
            ExtractionError::Pdf(error_str)
        }
    })
}

/// Cheap signature check, used for logging only
pub fn looks_like_pdf(data: &[u8]) -> bool {
    data.len() > 4 && &data[0..4] == b"%PDF"
}
