//! WordprocessingML boundary support.
//!
//! This crate translates an ordered list of plain-text paragraphs to and from a minimal
//! `.docx` package. It knows nothing about intake records or narratives; the core crate
//! decides what the paragraphs are.
//!
//! ## Package layout
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! docProps/core.xml
//! word/document.xml
//! ```
//!
//! ## Reading documents back
//!
//! [`read_paragraphs`] and [`read_paragraphs_from_path`] are verification helpers: they
//! recover the paragraph texts of a package written by this crate so callers can check an
//! export. They only understand the subset written here (`w:p` / `w:r` / `w:t`) and are
//! not a general `.docx` reader.
//!
//! ## Example Usage
//!
//! ```no_run
//! use technote_docx::DocxDocument;
//!
//! # fn main() -> Result<(), technote_docx::DocxError> {
//! let mut document = DocxDocument::new();
//! document.add_paragraph("Patient Name: Jane Doe")?;
//! document.add_paragraph("")?;
//! document.save("tech_note.docx")?;
//! # Ok(())
//! # }
//! ```

mod constants;
mod document_xml;
mod package;

pub use constants::{DOCX_EXTENSION, DOCUMENT_PART};
pub use package::{read_paragraphs, read_paragraphs_from_path};

use std::path::Path;

/// Errors returned by the `technote-docx` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Paragraph text contains a character that cannot appear in an XML 1.0 document.
    #[error("paragraph {paragraph} contains a character that is not XML compatible (U+{code:04X})")]
    InvalidCharacter { paragraph: usize, code: u32 },

    #[error("document package is missing part: {0}")]
    MissingPart(&'static str),
}

/// An in-memory document made of plain-text paragraphs.
///
/// Nothing touches the file system until [`DocxDocument::save`] is called, so a failed
/// export never leaves a partially written file behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxDocument {
    title: Option<String>,
    paragraphs: Vec<String>,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one paragraph. An empty string produces an empty paragraph.
    ///
    /// # Errors
    ///
    /// Returns `DocxError::InvalidCharacter` if the text contains control characters other
    /// than tab, line feed or carriage return.
    pub fn add_paragraph(&mut self, text: &str) -> Result<(), DocxError> {
        if let Some(c) = text.chars().find(|c| !is_xml_char(*c)) {
            return Err(DocxError::InvalidCharacter {
                paragraph: self.paragraphs.len() + 1,
                code: c as u32,
            });
        }
        self.paragraphs.push(text.to_owned());
        Ok(())
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Sets the `dc:title` document property.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Serialises the document to `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocxError> {
        package::write_package(self)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocxError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// XML 1.0 `Char` production, minus the non-characters U+FFFE and U+FFFF.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
