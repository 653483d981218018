//! Raw text extraction from DOCX (WordprocessingML) documents
//!
//! Only `word/document.xml` is read. Runs inside a paragraph are joined
//! as-is, tabs and line breaks are kept, and paragraphs are separated by a
//! blank line. Headers, footers, comments and footnotes are ignored.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract text from the bytes of a .docx file
pub fn extract_docx_text(data: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractionError::Archive(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Archive(format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Archive(e.to_string()))?;

    document_xml_to_text(&xml)
}

/// Walk WordprocessingML and collect the visible text
pub fn document_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = true,
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|err| ExtractionError::Xml(err.to_string()))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::Xml(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    Ok(text)
}
