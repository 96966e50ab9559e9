//! `word/document.xml` and `docProps/core.xml` serialisation.
//!
//! Paragraphs are written as a single run with one `w:t` element. An empty paragraph is
//! written as `<w:p/>` with no run at all.

use crate::constants::{CORE_PROPERTIES_NS, DUBLIN_CORE_NS, WORDPROCESSINGML_NS};
use crate::DocxError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

const PARAGRAPH: &[u8] = b"w:p";
const TEXT: &[u8] = b"w:t";

fn write_declaration(writer: &mut Writer<Vec<u8>>) -> Result<(), DocxError> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.write_event(Event::Text(BytesText::new("\n")))?;
    Ok(())
}

/// Write the main document part for the given paragraphs.
pub(crate) fn write_document(paragraphs: &[String]) -> Result<Vec<u8>, DocxError> {
    let mut writer = Writer::new(Vec::new());
    write_declaration(&mut writer)?;

    writer.write_event(Event::Start(
        BytesStart::new("w:document").with_attributes([("xmlns:w", WORDPROCESSINGML_NS)]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for text in paragraphs {
        if text.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("w:p")))?;
            continue;
        }

        writer.write_event(Event::Start(BytesStart::new("w:p")))?;
        writer.write_event(Event::Start(BytesStart::new("w:r")))?;
        writer.write_event(Event::Start(
            BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
        ))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;
        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
        writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    Ok(writer.into_inner())
}

/// Write the core properties part. The title is omitted when not set.
pub(crate) fn write_core_properties(title: Option<&str>) -> Result<Vec<u8>, DocxError> {
    let mut writer = Writer::new(Vec::new());
    write_declaration(&mut writer)?;

    writer.write_event(Event::Start(
        BytesStart::new("cp:coreProperties")
            .with_attributes([("xmlns:cp", CORE_PROPERTIES_NS), ("xmlns:dc", DUBLIN_CORE_NS)]),
    ))?;

    if let Some(title) = title {
        writer.write_event(Event::Start(BytesStart::new("dc:title")))?;
        writer.write_event(Event::Text(BytesText::new(title)))?;
        writer.write_event(Event::End(BytesEnd::new("dc:title")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("cp:coreProperties")))?;

    Ok(writer.into_inner())
}

/// Read paragraph texts back out of a main document part.
///
/// Only text inside `w:t` elements is collected; runs within one paragraph are
/// concatenated.
pub(crate) fn read_document(xml: &str) -> Result<Vec<String>, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == PARAGRAPH => current = Some(String::new()),
            Event::Empty(e) if e.name().as_ref() == PARAGRAPH => paragraphs.push(String::new()),
            Event::End(e) if e.name().as_ref() == PARAGRAPH => {
                if let Some(paragraph) = current.take() {
                    paragraphs.push(paragraph);
                }
            }
            Event::Start(e) if e.name().as_ref() == TEXT => in_text = true,
            Event::End(e) if e.name().as_ref() == TEXT => in_text = false,
            Event::Text(t) if in_text => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
