//! Narrative text generation.
//!
//! Turns an [`IntakeRecord`] snapshot into the text shown to the user: a labeled summary
//! block, one blank line, and a single templated sentence block. Values are inserted
//! verbatim with no escaping, truncation or formatting.

use crate::intake::{IntakeField, IntakeRecord};

/// Generated summary and narrative text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrativeText(String);

impl NarrativeText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NarrativeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NarrativeText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One `"<Label>: <value>"` line per field, in declared order.
///
/// The SPO2 line carries a literal `%` directly after the stored value.
pub fn summary_lines(record: &IntakeRecord) -> Vec<String> {
    IntakeField::ALL
        .into_iter()
        .map(|field| {
            let suffix = if field == IntakeField::Spo2Nadir { "%" } else { "" };
            format!("{}: {}{}", field.summary_label(), record.get(field), suffix)
        })
        .collect()
}

/// The narrative sentence block.
pub fn narrative_sentence(record: &IntakeRecord) -> String {
    format!(
        "On {date}, {name} (DOB: {dob}) underwent a {study_type} at {location}. \
         The study was conducted by {tech} using a {mask} mask. \
         The referring provider was {referring}. \
         The {study_ran} was successfully completed. \
         SPO2 nadir during the study was {spo2}%. \
         Reported sleep issues: {issues}.",
        date = record.date_of_service,
        name = record.patient_name,
        dob = record.dob,
        study_type = record.study_type,
        location = record.location,
        tech = record.sleep_tech,
        mask = record.mask_used,
        referring = record.referring_md,
        study_ran = record.study_ran,
        spo2 = record.spo2_nadir,
        issues = record.sleep_issues,
    )
}

/// Generate the full narrative text for a record.
///
/// Pure: the same record always yields the same text.
pub fn generate(record: &IntakeRecord) -> NarrativeText {
    let summary = summary_lines(record).join("\n");
    let text = format!("{}\n\n{}", summary, narrative_sentence(record));
    tracing::debug!(bytes = text.len(), "generated narrative text");
    NarrativeText(text)
}
