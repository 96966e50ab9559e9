//! User-facing status messages.
//!
//! The core never shows dialogs itself. It hands the presentation layer a [`Notice`] and
//! the presentation decides how to render it.

use crate::constants::{
    EXPORT_ERROR_TITLE, EXPORT_SUCCESS_TITLE, GENERATION_ERROR_TITLE, NO_CONTENT_MESSAGE,
    NO_CONTENT_TITLE,
};
use crate::export::ExportOutcome;
use crate::TechNoteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    /// The notice for a finished export, or `None` for a silent cancel.
    pub fn for_export_outcome(outcome: &ExportOutcome) -> Option<Self> {
        match outcome {
            ExportOutcome::Saved(path) => Some(Self::new(
                Severity::Info,
                EXPORT_SUCCESS_TITLE,
                format!("File saved to:\n{}", path.display()),
            )),
            ExportOutcome::NothingToExport => Some(Self::new(
                Severity::Warning,
                NO_CONTENT_TITLE,
                NO_CONTENT_MESSAGE,
            )),
            ExportOutcome::Cancelled => None,
        }
    }

    pub fn for_export_error(error: &TechNoteError) -> Self {
        Self::new(Severity::Error, EXPORT_ERROR_TITLE, error.to_string())
    }

    /// Failure to assemble the inputs for generation, such as an unreadable intake file.
    pub fn for_generation_error(error: &TechNoteError) -> Self {
        Self::new(Severity::Error, GENERATION_ERROR_TITLE, error.to_string())
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
