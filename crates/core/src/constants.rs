//! Constants used throughout the tech note core crate.
//!
//! Choice lists offered by the presentation layer live here so that every front end
//! suggests the same values.

/// Default value of the sleep-issues field before the user picks one.
pub const SLEEP_ISSUES_DEFAULT: &str = "Unknown";

/// Tri-state sleep-issues choices.
pub const SLEEP_ISSUES_CHOICES: &[&str] = &["Yes", "No", "Unknown"];

pub const STUDY_TYPE_CHOICES: &[&str] = &["PSG", "CPAP", "BiPAP", "HSAT"];

pub const STUDY_RAN_CHOICES: &[&str] = &["Full Night", "Split Night", "Titration"];

pub const MASK_USED_CHOICES: &[&str] = &["Nasal", "Full Face", "Nasal Pillows"];

pub const SLEEP_TECH_CHOICES: &[&str] = &["Tech A", "Tech B", "Tech C"];

pub const LOCATION_CHOICES: &[&str] = &["Main Lab", "Satellite Office", "Home"];

/// Default file stem offered by save-path pickers.
pub const DEFAULT_FILE_STEM: &str = "tech_note";

/// Title written into exported document properties.
pub const DOCUMENT_TITLE: &str = "Sleep Study Tech Note";

// Notice titles and messages shown by the presentation layer.
pub const NO_CONTENT_TITLE: &str = "No Content";
pub const NO_CONTENT_MESSAGE: &str = "Nothing to export.";
pub const EXPORT_SUCCESS_TITLE: &str = "Export Successful";
pub const EXPORT_ERROR_TITLE: &str = "Export Error";
pub const GENERATION_ERROR_TITLE: &str = "Error";
