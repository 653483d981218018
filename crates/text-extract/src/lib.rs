//! Text extraction for uploaded documents
//!
//! Bytes plus a declared media type and file name go in, a plain string comes
//! out. PDF and DOCX are recognised by media type or extension; anything
//! else is decoded as UTF-8.

pub mod docx;
pub mod error;
pub mod pdf;

pub use error::ExtractionError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// What the client told us about the upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInfo {
    pub mime_type: String,
    pub file_name: String,
}

impl SourceInfo {
    pub fn new(mime_type: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            file_name: file_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Pick the extractor for an upload; first match wins
    pub fn detect(source: &SourceInfo) -> Self {
        let lower_name = source.file_name.to_lowercase();

        if source.mime_type == PDF_MIME || lower_name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if source.mime_type == DOCX_MIME || lower_name.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::PlainText
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "text",
        }
    }
}

/// Extract plain text from an uploaded document
pub fn extract_text(data: &[u8], source: &SourceInfo) -> Result<String, ExtractionError> {
    match DocumentFormat::detect(source) {
        DocumentFormat::Pdf => pdf::extract_pdf_text(data),
        DocumentFormat::Docx => docx::extract_docx_text(data),
        // Invalid sequences become U+FFFD rather than failing
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(data).into_owned()),
    }
}
