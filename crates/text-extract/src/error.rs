use thiserror::Error;

/// Why a document's text could not be extracted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// PDF parsing failed
    #[error("PDF parse error: {0}")]
    Pdf(String),

    /// Fonts without a usable ToUnicode map (Identity-H etc.)
    #[error("PDF encoding failure: {details}")]
    Encoding { details: String },

    /// Not a zip container, or the main document part is missing
    #[error("DOCX archive error: {0}")]
    Archive(String),

    #[error("DOCX XML error: {0}")]
    Xml(String),
}
