//! Form session state.
//!
//! A [`FormSession`] is owned by the presentation layer and passed by reference to whatever
//! handles user input. It holds the intake record being edited and the text currently on
//! display. Generation reads an immutable snapshot of the record; export reads the display.

use crate::export::{export_text, DocumentWriter, SavePathPicker};
use crate::intake::{IntakeField, IntakeRecord};
use crate::narrative::{self, NarrativeText};
use crate::notice::Notice;

#[derive(Clone, Debug, Default)]
pub struct FormSession {
    record: IntakeRecord,
    displayed_text: String,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: IntakeRecord) -> Self {
        Self {
            record,
            displayed_text: String::new(),
        }
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut IntakeRecord {
        &mut self.record
    }

    pub fn set_field(&mut self, field: IntakeField, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Regenerate the narrative and replace the displayed text with it.
    pub fn generate(&mut self) -> NarrativeText {
        let text = narrative::generate(&self.record);
        self.displayed_text = text.as_str().to_owned();
        text
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// Replace the displayed text, e.g. after the user edits it by hand.
    pub fn set_displayed_text(&mut self, text: impl Into<String>) {
        self.displayed_text = text.into();
    }

    /// Export the displayed text and describe the result for the user.
    ///
    /// Returns `None` only when the user cancelled path selection.
    pub fn export<P, W>(&self, picker: &mut P, writer: &W) -> Option<Notice>
    where
        P: SavePathPicker + ?Sized,
        W: DocumentWriter,
    {
        match export_text(&self.displayed_text, picker, writer) {
            Ok(outcome) => Notice::for_export_outcome(&outcome),
            Err(e) => {
                tracing::error!("export failed: {}", e);
                Some(Notice::for_export_error(&e))
            }
        }
    }
}
