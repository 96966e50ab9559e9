//! `.docx` implementation of the document-writer collaborator.

use crate::constants::DOCUMENT_TITLE;
use crate::export::{Document, DocumentWriter};
use crate::TechNoteResult;
use std::path::Path;
use technote_docx::DocxDocument;

/// Writes exported tech notes as WordprocessingML documents.
#[derive(Clone, Debug, Default)]
pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for DocxWriter {
    type Document = DocxDocument;

    fn create_document(&self) -> DocxDocument {
        let mut document = DocxDocument::new();
        document.set_title(DOCUMENT_TITLE);
        document
    }
}

impl Document for DocxDocument {
    fn add_paragraph(&mut self, text: &str) -> TechNoteResult<()> {
        DocxDocument::add_paragraph(self, text)?;
        Ok(())
    }

    fn save(self, path: &Path) -> TechNoteResult<()> {
        DocxDocument::save(&self, path)?;
        Ok(())
    }
}
