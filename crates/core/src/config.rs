//! Core runtime configuration.
//!
//! This module defines configuration that is resolved once at process startup and then
//! passed to the collaborators that need it. Front ends read environment variables or
//! command-line flags; nothing in the core reads process-wide state afterwards.

use crate::constants::DEFAULT_FILE_STEM;
use crate::{TechNoteError, TechNoteResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    export_dir: PathBuf,
    default_file_stem: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(export_dir: PathBuf, default_file_stem: String) -> TechNoteResult<Self> {
        if default_file_stem.trim().is_empty() {
            return Err(TechNoteError::InvalidInput(
                "default_file_stem cannot be empty".into(),
            ));
        }

        Ok(Self {
            export_dir,
            default_file_stem,
        })
    }

    /// Build a configuration from an optional export directory override.
    pub fn from_export_dir_override(override_dir: Option<PathBuf>) -> TechNoteResult<Self> {
        Self::new(
            resolve_export_dir(override_dir)?,
            DEFAULT_FILE_STEM.to_string(),
        )
    }

    /// Directory offered by save-path pickers.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn default_file_stem(&self) -> &str {
        &self.default_file_stem
    }

    /// Suggested save path for a patient's note, e.g. `<export_dir>/tech_note_jane_doe.docx`.
    ///
    /// Characters that are awkward in file names are replaced with `_`.
    pub fn suggested_export_path(&self, patient_name: &str) -> PathBuf {
        let slug: String = patient_name
            .trim()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        let slug = slug.trim_matches('_');

        let stem = if slug.is_empty() {
            self.default_file_stem.clone()
        } else {
            format!("{}_{}", self.default_file_stem, slug)
        };

        self.export_dir
            .join(stem)
            .with_extension(technote_docx::DOCX_EXTENSION)
    }
}

/// Resolve the export directory.
///
/// If `override_dir` is provided it must be an existing directory. Otherwise the current
/// working directory is used.
pub fn resolve_export_dir(override_dir: Option<PathBuf>) -> TechNoteResult<PathBuf> {
    if let Some(dir) = override_dir {
        if dir.is_dir() {
            return Ok(dir);
        }
        return Err(TechNoteError::InvalidInput(format!(
            "export directory override is not a directory: {}",
            dir.display()
        )));
    }

    Ok(PathBuf::from("."))
}
