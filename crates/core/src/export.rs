//! Document export.
//!
//! Persists the currently displayed text as a paragraph-per-line document. The save-path
//! picker and the document writer are collaborators supplied by the caller, so the same
//! flow drives the interactive form, the scripted CLI and the tests.

use crate::{TechNoteError, TechNoteResult};
use std::path::{Path, PathBuf};
use technote_types::NonEmptyText;

/// Asks the user where to save. `Ok(None)` means the user cancelled.
pub trait SavePathPicker {
    fn pick_save_path(&mut self) -> TechNoteResult<Option<PathBuf>>;
}

/// A document under construction.
pub trait Document {
    fn add_paragraph(&mut self, text: &str) -> TechNoteResult<()>;

    /// Persist the document to `path`, replacing any existing file.
    fn save(self, path: &Path) -> TechNoteResult<()>;
}

/// Creates new, empty documents.
pub trait DocumentWriter {
    type Document: Document;

    fn create_document(&self) -> Self::Document;
}

/// Result of an export action that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written to this path.
    Saved(PathBuf),
    /// The text was empty after trimming; nothing was written.
    NothingToExport,
    /// The user dismissed the save-path picker; nothing was written.
    Cancelled,
}

/// Export `text` through the given collaborators.
///
/// The text is trimmed and split on newlines; each line, including blank interior lines,
/// becomes one paragraph in order. The picker is not consulted when there is nothing to
/// export.
///
/// # Errors
///
/// Returns any error raised by the picker, the document or the save call. Nothing is
/// retried and no file is left behind by a failed document build, since the document is
/// only saved once it is complete.
pub fn export_text<P, W>(text: &str, picker: &mut P, writer: &W) -> TechNoteResult<ExportOutcome>
where
    P: SavePathPicker + ?Sized,
    W: DocumentWriter,
{
    let content = match NonEmptyText::new(text) {
        Ok(content) => content,
        Err(_) => {
            tracing::warn!("export requested with no content");
            return Ok(ExportOutcome::NothingToExport);
        }
    };

    let Some(path) = picker.pick_save_path()? else {
        tracing::debug!("export cancelled at path selection");
        return Ok(ExportOutcome::Cancelled);
    };

    let mut document = writer.create_document();
    let mut paragraphs = 0usize;
    for line in content.lines() {
        document.add_paragraph(line)?;
        paragraphs += 1;
    }
    document.save(&path)?;

    tracing::info!(path = %path.display(), paragraphs, "exported tech note");
    Ok(ExportOutcome::Saved(path))
}

/// Picker that always returns the same answer. Used by non-interactive front ends.
#[derive(Clone, Debug)]
pub struct FixedPathPicker(Option<PathBuf>);

impl FixedPathPicker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self(path)
    }
}

impl SavePathPicker for FixedPathPicker {
    fn pick_save_path(&mut self) -> TechNoteResult<Option<PathBuf>> {
        Ok(self.0.clone())
    }
}

/// Normalise a user-entered save path.
///
/// Blank input means the user cancelled. A path without an extension gets `.docx`
/// appended, matching a save dialog's default extension.
pub fn normalise_save_path(input: &str) -> TechNoteResult<Option<PathBuf>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let mut path = PathBuf::from(input);
    if path.file_name().is_none() {
        return Err(TechNoteError::PathSelection(format!(
            "not a file path: {input}"
        )));
    }
    if path.extension().is_none() {
        path.set_extension(technote_docx::DOCX_EXTENSION);
    }
    Ok(Some(path))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call made by the exporter.
    #[derive(Debug, Default)]
    pub(crate) struct Recorded {
        pub documents_created: usize,
        pub paragraphs: Vec<String>,
        pub saved_to: Vec<PathBuf>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct RecordingWriter {
        pub recorded: Rc<RefCell<Recorded>>,
        pub fail_save: bool,
    }

    pub(crate) struct RecordingDocument {
        recorded: Rc<RefCell<Recorded>>,
        fail_save: bool,
    }

    impl DocumentWriter for RecordingWriter {
        type Document = RecordingDocument;

        fn create_document(&self) -> RecordingDocument {
            self.recorded.borrow_mut().documents_created += 1;
            RecordingDocument {
                recorded: Rc::clone(&self.recorded),
                fail_save: self.fail_save,
            }
        }
    }

    impl Document for RecordingDocument {
        fn add_paragraph(&mut self, text: &str) -> TechNoteResult<()> {
            self.recorded.borrow_mut().paragraphs.push(text.to_string());
            Ok(())
        }

        fn save(self, path: &Path) -> TechNoteResult<()> {
            if self.fail_save {
                return Err(TechNoteError::Docx(technote_docx::DocxError::Io(
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume"),
                )));
            }
            self.recorded.borrow_mut().saved_to.push(path.to_path_buf());
            Ok(())
        }
    }

    /// Counts how often it was asked for a path.
    pub(crate) struct CountingPicker {
        pub answer: TechNoteResult<Option<PathBuf>>,
        pub calls: usize,
    }

    impl CountingPicker {
        pub fn returning(path: Option<&str>) -> Self {
            Self {
                answer: Ok(path.map(PathBuf::from)),
                calls: 0,
            }
        }
    }

    impl SavePathPicker for CountingPicker {
        fn pick_save_path(&mut self) -> TechNoteResult<Option<PathBuf>> {
            self.calls += 1;
            match &self.answer {
                Ok(path) => Ok(path.clone()),
                Err(e) => Err(TechNoteError::PathSelection(e.to_string())),
            }
        }
    }

    #[test]
    fn whitespace_only_text_writes_nothing() {
        let writer = RecordingWriter::default();
        let mut picker = CountingPicker::returning(Some("/tmp/never.docx"));

        let outcome = export_text("  \n\t \n", &mut picker, &writer).unwrap();

        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert_eq!(picker.calls, 0);
        let recorded = writer.recorded.borrow();
        assert_eq!(recorded.documents_created, 0);
        assert!(recorded.saved_to.is_empty());
    }

    #[test]
    fn cancelled_picker_writes_nothing() {
        let writer = RecordingWriter::default();
        let mut picker = CountingPicker::returning(None);

        let outcome = export_text("Location: Home", &mut picker, &writer).unwrap();

        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert_eq!(picker.calls, 1);
        assert_eq!(writer.recorded.borrow().documents_created, 0);
    }

    #[test]
    fn one_paragraph_per_line_in_order() {
        let writer = RecordingWriter::default();
        let mut picker = CountingPicker::returning(Some("out/note.docx"));

        let text = "Patient Name: Jane Doe\nPt DOB: 1980-05-05\n\nOn 2024-01-01, Jane Doe";
        let outcome = export_text(text, &mut picker, &writer).unwrap();

        assert_eq!(outcome, ExportOutcome::Saved(PathBuf::from("out/note.docx")));
        let recorded = writer.recorded.borrow();
        assert_eq!(recorded.documents_created, 1);
        assert_eq!(
            recorded.paragraphs,
            vec![
                "Patient Name: Jane Doe",
                "Pt DOB: 1980-05-05",
                "",
                "On 2024-01-01, Jane Doe"
            ]
        );
        assert_eq!(recorded.saved_to, vec![PathBuf::from("out/note.docx")]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_splitting() {
        let writer = RecordingWriter::default();
        let mut picker = CountingPicker::returning(Some("note.docx"));

        export_text("\n\n  first\n\nlast  \n\n", &mut picker, &writer).unwrap();

        assert_eq!(writer.recorded.borrow().paragraphs, vec!["first", "", "last"]);
    }

    #[test]
    fn picker_error_is_returned() {
        let writer = RecordingWriter::default();
        let mut picker = CountingPicker {
            answer: Err(TechNoteError::PathSelection("dialog unavailable".into())),
            calls: 0,
        };

        let err = export_text("text", &mut picker, &writer).unwrap_err();

        assert!(matches!(err, TechNoteError::PathSelection(_)));
        assert_eq!(writer.recorded.borrow().documents_created, 0);
    }

    #[test]
    fn save_error_is_returned() {
        let writer = RecordingWriter {
            fail_save: true,
            ..RecordingWriter::default()
        };
        let mut picker = CountingPicker::returning(Some("note.docx"));

        let err = export_text("text", &mut picker, &writer).unwrap_err();

        assert!(err.to_string().contains("read-only volume"));
        assert!(writer.recorded.borrow().saved_to.is_empty());
    }

    #[test]
    fn save_path_normalisation() {
        assert_eq!(normalise_save_path("   ").unwrap(), None);
        assert_eq!(
            normalise_save_path("notes/jane").unwrap(),
            Some(PathBuf::from("notes/jane.docx"))
        );
        assert_eq!(
            normalise_save_path(" jane.doc ").unwrap(),
            Some(PathBuf::from("jane.doc"))
        );
        assert!(matches!(
            normalise_save_path(".."),
            Err(TechNoteError::PathSelection(_))
        ));
    }
}
