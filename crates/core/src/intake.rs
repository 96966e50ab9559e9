//! Intake record domain model.
//!
//! An [`IntakeRecord`] holds the clinical fields collected for one sleep-study visit. Every
//! field is a plain string; any semantic typing (dates, enumerated choices) is the
//! presentation layer's business and is described by [`FieldKind`].

use crate::constants::{
    LOCATION_CHOICES, MASK_USED_CHOICES, SLEEP_ISSUES_CHOICES, SLEEP_ISSUES_DEFAULT,
    SLEEP_TECH_CHOICES, STUDY_RAN_CHOICES, STUDY_TYPE_CHOICES,
};
use crate::{TechNoteError, TechNoteResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The clinical fields collected per patient visit.
///
/// Missing fields deserialise to their defaults, so an intake file may list only the
/// values it knows. Numbers and booleans are kept in their literal form, so
/// `"spo2_nadir": 88` reads the same as `"spo2_nadir": "88"`; `null` reads as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeRecord {
    #[serde(deserialize_with = "scalar_as_string")]
    pub date_of_service: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub patient_name: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub dob: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub referring_md: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub study_type: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub study_ran: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub mask_used: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub spo2_nadir: String,
    /// Tri-state flag: `Yes`, `No` or `Unknown`.
    #[serde(deserialize_with = "scalar_as_string")]
    pub sleep_issues: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub sleep_tech: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub location: String,
}

/// Read any scalar into a text field.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Flag(b)) => b.to_string(),
    })
}

impl Default for IntakeRecord {
    fn default() -> Self {
        Self {
            date_of_service: String::new(),
            patient_name: String::new(),
            dob: String::new(),
            referring_md: String::new(),
            study_type: String::new(),
            study_ran: String::new(),
            mask_used: String::new(),
            spo2_nadir: String::new(),
            sleep_issues: SLEEP_ISSUES_DEFAULT.to_string(),
            sleep_tech: String::new(),
            location: String::new(),
        }
    }
}

impl IntakeRecord {
    pub fn get(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::DateOfService => &self.date_of_service,
            IntakeField::PatientName => &self.patient_name,
            IntakeField::Dob => &self.dob,
            IntakeField::ReferringMd => &self.referring_md,
            IntakeField::StudyType => &self.study_type,
            IntakeField::StudyRan => &self.study_ran,
            IntakeField::MaskUsed => &self.mask_used,
            IntakeField::Spo2Nadir => &self.spo2_nadir,
            IntakeField::SleepIssues => &self.sleep_issues,
            IntakeField::SleepTech => &self.sleep_tech,
            IntakeField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        let slot = match field {
            IntakeField::DateOfService => &mut self.date_of_service,
            IntakeField::PatientName => &mut self.patient_name,
            IntakeField::Dob => &mut self.dob,
            IntakeField::ReferringMd => &mut self.referring_md,
            IntakeField::StudyType => &mut self.study_type,
            IntakeField::StudyRan => &mut self.study_ran,
            IntakeField::MaskUsed => &mut self.mask_used,
            IntakeField::Spo2Nadir => &mut self.spo2_nadir,
            IntakeField::SleepIssues => &mut self.sleep_issues,
            IntakeField::SleepTech => &mut self.sleep_tech,
            IntakeField::Location => &mut self.location,
        };
        *slot = value.into();
    }

    /// Load an intake record from a YAML or JSON file.
    ///
    /// Files ending in `.json` are parsed as JSON; anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns `TechNoteError::IntakeRead` if the file cannot be read, or a parse error if
    /// the contents are malformed or name an unknown field.
    pub fn from_path(path: &Path) -> TechNoteResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(TechNoteError::IntakeRead)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&contents).map_err(TechNoteError::IntakeJson)
        } else {
            serde_yaml::from_str(&contents).map_err(TechNoteError::IntakeYaml)
        }
    }
}

/// How the presentation layer should collect a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// A calendar date.
    Date,
    /// Free text with suggested values.
    Suggested(&'static [&'static str]),
    /// Exactly one of the listed values.
    Exclusive(&'static [&'static str]),
}

/// Names each intake field, in the fixed order used by the summary block and the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntakeField {
    DateOfService,
    PatientName,
    Dob,
    ReferringMd,
    StudyType,
    StudyRan,
    MaskUsed,
    Spo2Nadir,
    SleepIssues,
    SleepTech,
    Location,
}

impl IntakeField {
    pub const ALL: [IntakeField; 11] = [
        IntakeField::DateOfService,
        IntakeField::PatientName,
        IntakeField::Dob,
        IntakeField::ReferringMd,
        IntakeField::StudyType,
        IntakeField::StudyRan,
        IntakeField::MaskUsed,
        IntakeField::Spo2Nadir,
        IntakeField::SleepIssues,
        IntakeField::SleepTech,
        IntakeField::Location,
    ];

    /// Label used in the summary block.
    pub fn summary_label(self) -> &'static str {
        match self {
            IntakeField::DateOfService => "Date of Service",
            IntakeField::PatientName => "Patient Name",
            IntakeField::Dob => "Pt DOB",
            IntakeField::ReferringMd => "Referring MD",
            IntakeField::StudyType => "Study Type",
            IntakeField::StudyRan => "Study Ran",
            IntakeField::MaskUsed => "Mask Used",
            IntakeField::Spo2Nadir => "SPO2 Nadir",
            IntakeField::SleepIssues => "Sleep Issues",
            IntakeField::SleepTech => "Sleep Tech",
            IntakeField::Location => "Location",
        }
    }

    /// Label shown next to the input on the form.
    pub fn form_label(self) -> &'static str {
        match self {
            IntakeField::Dob => "Patient DOB",
            IntakeField::Spo2Nadir => "SPO2 Nadir (%)",
            other => other.summary_label(),
        }
    }

    /// The snake_case key used in intake files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            IntakeField::DateOfService => "date_of_service",
            IntakeField::PatientName => "patient_name",
            IntakeField::Dob => "dob",
            IntakeField::ReferringMd => "referring_md",
            IntakeField::StudyType => "study_type",
            IntakeField::StudyRan => "study_ran",
            IntakeField::MaskUsed => "mask_used",
            IntakeField::Spo2Nadir => "spo2_nadir",
            IntakeField::SleepIssues => "sleep_issues",
            IntakeField::SleepTech => "sleep_tech",
            IntakeField::Location => "location",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            IntakeField::DateOfService | IntakeField::Dob => FieldKind::Date,
            IntakeField::PatientName | IntakeField::ReferringMd | IntakeField::Spo2Nadir => {
                FieldKind::Text
            }
            IntakeField::StudyType => FieldKind::Suggested(STUDY_TYPE_CHOICES),
            IntakeField::StudyRan => FieldKind::Suggested(STUDY_RAN_CHOICES),
            IntakeField::MaskUsed => FieldKind::Suggested(MASK_USED_CHOICES),
            IntakeField::SleepIssues => FieldKind::Exclusive(SLEEP_ISSUES_CHOICES),
            IntakeField::SleepTech => FieldKind::Suggested(SLEEP_TECH_CHOICES),
            IntakeField::Location => FieldKind::Suggested(LOCATION_CHOICES),
        }
    }
}

impl std::fmt::Display for IntakeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.form_label())
    }
}

impl std::str::FromStr for IntakeField {
    type Err = TechNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntakeField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| TechNoteError::InvalidInput(format!("unknown intake field: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_record_is_empty_except_sleep_issues() {
        let record = IntakeRecord::default();
        for field in IntakeField::ALL {
            let expected = if field == IntakeField::SleepIssues {
                "Unknown"
            } else {
                ""
            };
            assert_eq!(record.get(field), expected, "{}", field.key());
        }
    }

    #[test]
    fn set_then_get_touches_only_that_field() {
        let mut record = IntakeRecord::default();
        record.set(IntakeField::MaskUsed, "Full Face");

        assert_eq!(record.mask_used, "Full Face");
        assert_eq!(record.get(IntakeField::MaskUsed), "Full Face");
        assert_eq!(record.location, "");
    }

    #[test]
    fn keys_match_serde_names() {
        let value = serde_json::to_value(IntakeRecord::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), IntakeField::ALL.len());
        for field in IntakeField::ALL {
            assert!(object.contains_key(field.key()), "{}", field.key());
            assert_eq!(field.key().parse::<IntakeField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_key_does_not_parse() {
        assert!(matches!(
            "blood_type".parse::<IntakeField>(),
            Err(TechNoteError::InvalidInput(_))
        ));
    }

    #[test]
    fn loads_partial_yaml_intake() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("intake.yaml");
        std::fs::write(&path, "patient_name: Jane Doe\nspo2_nadir: \"88\"\n").unwrap();

        let record = IntakeRecord::from_path(&path).unwrap();

        assert_eq!(record.patient_name, "Jane Doe");
        assert_eq!(record.spo2_nadir, "88");
        assert_eq!(record.sleep_issues, "Unknown");
    }

    #[test]
    fn loads_json_intake_by_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("intake.json");
        std::fs::write(&path, r#"{"location": "Home", "sleep_issues": "No"}"#).unwrap();

        let record = IntakeRecord::from_path(&path).unwrap();

        assert_eq!(record.location, "Home");
        assert_eq!(record.sleep_issues, "No");
    }

    #[test]
    fn numeric_spo2_reads_the_same_in_json_and_yaml() {
        let temp = TempDir::new().unwrap();
        let json = temp.path().join("intake.json");
        let yaml = temp.path().join("intake.yaml");
        std::fs::write(&json, r#"{"spo2_nadir": 88, "patient_name": null}"#).unwrap();
        std::fs::write(&yaml, "spo2_nadir: 88\npatient_name:\n").unwrap();

        let from_json = IntakeRecord::from_path(&json).unwrap();
        let from_yaml = IntakeRecord::from_path(&yaml).unwrap();

        assert_eq!(from_json.spo2_nadir, "88");
        assert_eq!(from_json.patient_name, "");
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn fractional_spo2_keeps_its_digits() {
        let record: IntakeRecord = serde_json::from_str(r#"{"spo2_nadir": 88.5}"#).unwrap();
        assert_eq!(record.spo2_nadir, "88.5");
    }

    #[test]
    fn nested_values_are_rejected() {
        let result: Result<IntakeRecord, _> =
            serde_json::from_str(r#"{"location": {"name": "Home"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_intake_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("intake.yaml");
        std::fs::write(&path, "patient: Jane Doe\n").unwrap();

        let err = IntakeRecord::from_path(&path).unwrap_err();
        assert!(matches!(err, TechNoteError::IntakeYaml(_)));
    }

    #[test]
    fn missing_intake_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let err = IntakeRecord::from_path(&temp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, TechNoteError::IntakeRead(_)));
    }

    #[test]
    fn sleep_issues_is_the_only_exclusive_field() {
        let exclusive: Vec<IntakeField> = IntakeField::ALL
            .into_iter()
            .filter(|f| matches!(f.kind(), FieldKind::Exclusive(_)))
            .collect();
        assert_eq!(exclusive, vec![IntakeField::SleepIssues]);
        assert_eq!(IntakeField::Dob.form_label(), "Patient DOB");
        assert_eq!(IntakeField::Dob.summary_label(), "Pt DOB");
    }
}
