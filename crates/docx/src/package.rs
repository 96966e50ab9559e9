//! Zip packaging of the document parts.

use crate::constants::{
    CONTENT_TYPES_PART, CONTENT_TYPES_XML, CORE_PROPERTIES_PART, DOCUMENT_PART, ROOT_RELS_PART,
    ROOT_RELS_XML,
};
use crate::{document_xml, DocxDocument, DocxError};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub(crate) fn write_package(document: &DocxDocument) -> Result<Vec<u8>, DocxError> {
    let document_xml = document_xml::write_document(document.paragraphs())?;
    let core_xml = document_xml::write_core_properties(document.title())?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // [Content_Types].xml must be the first entry for some consumers.
    let parts: [(&str, &[u8]); 4] = [
        (CONTENT_TYPES_PART, CONTENT_TYPES_XML.as_bytes()),
        (ROOT_RELS_PART, ROOT_RELS_XML.as_bytes()),
        (CORE_PROPERTIES_PART, core_xml.as_slice()),
        (DOCUMENT_PART, document_xml.as_slice()),
    ];
    for (name, bytes) in parts {
        zip.start_file(name, options)?;
        zip.write_all(bytes)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Read the paragraph texts of a `.docx` package held in memory.
///
/// Verification helper for packages written by [`DocxDocument`]; text outside `w:t`
/// elements (tabs, breaks, fields) is ignored.
pub fn read_paragraphs(bytes: &[u8]) -> Result<Vec<String>, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    {
        let mut part = match archive.by_name(DOCUMENT_PART) {
            Ok(part) => part,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(DocxError::MissingPart(DOCUMENT_PART))
            }
            Err(e) => return Err(e.into()),
        };
        part.read_to_string(&mut xml)?;
    }

    document_xml::read_document(&xml)
}

/// Read the paragraph texts of a `.docx` file. See [`read_paragraphs`].
pub fn read_paragraphs_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, DocxError> {
    let bytes = std::fs::read(path)?;
    read_paragraphs(&bytes)
}
