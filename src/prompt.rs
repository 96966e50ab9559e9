//! Terminal widgets for the intake form.
//!
//! Each [`FieldKind`] maps to one prompt: dates are validated like a calendar picker,
//! suggested fields offer their choices plus free text, and exclusive fields only accept
//! one of their choices.

use chrono::NaiveDate;
use console::style;
use dialoguer::{Editor, Input, Select};
use std::path::PathBuf;
use technote_core::constants::GENERATION_ERROR_TITLE;
use technote_core::export::normalise_save_path;
use technote_core::{
    CoreConfig, FieldKind, IntakeField, IntakeRecord, Notice, SavePathPicker, Severity,
    TechNoteError, TechNoteResult,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const OTHER_CHOICE: &str = "Other...";

/// Check that `input` is a calendar date in `YYYY-MM-DD` form. Blank is allowed.
pub fn validate_date(input: &str) -> Result<(), String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| format!("expected a date like 2024-01-31, got '{}'", input))
}

/// Index of `current` in `choices`, if present.
pub fn choice_index(choices: &[&str], current: &str) -> Option<usize> {
    choices.iter().position(|choice| *choice == current)
}

/// Prompt for one field, starting from its current value.
pub fn prompt_field(field: IntakeField, current: &str) -> dialoguer::Result<String> {
    let label = field.form_label();

    match field.kind() {
        FieldKind::Text => Input::new()
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text(),
        FieldKind::Date => {
            let initial = if current.is_empty() {
                chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
            } else {
                current.to_string()
            };
            let value: String = Input::new()
                .with_prompt(format!("{} (YYYY-MM-DD)", label))
                .with_initial_text(initial)
                .allow_empty(true)
                .validate_with(|input: &String| validate_date(input))
                .interact_text()?;
            Ok(value.trim().to_string())
        }
        FieldKind::Suggested(choices) => {
            let mut items: Vec<&str> = choices.to_vec();
            items.push(OTHER_CHOICE);
            let default = match (current.is_empty(), choice_index(choices, current)) {
                (_, Some(index)) => index,
                (true, None) => 0,
                (false, None) => items.len() - 1,
            };

            let selection = Select::new()
                .with_prompt(label)
                .items(&items)
                .default(default)
                .interact()?;

            if selection == items.len() - 1 {
                Input::new()
                    .with_prompt(label)
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()
            } else {
                Ok(items[selection].to_string())
            }
        }
        FieldKind::Exclusive(choices) => {
            let selection = Select::new()
                .with_prompt(label)
                .items(choices)
                .default(choice_index(choices, current).unwrap_or(0))
                .interact()?;
            Ok(choices[selection].to_string())
        }
    }
}

/// Prompt for every field in form order.
pub fn prompt_all(record: &mut IntakeRecord) -> dialoguer::Result<()> {
    for field in IntakeField::ALL {
        let value = prompt_field(field, record.get(field))?;
        record.set(field, value);
    }
    Ok(())
}

/// Save-path picker backed by a text prompt. Submitting a blank path cancels.
pub struct PromptPathPicker<'a> {
    config: &'a CoreConfig,
    patient_name: String,
}

impl<'a> PromptPathPicker<'a> {
    pub fn new(config: &'a CoreConfig, patient_name: &str) -> Self {
        Self {
            config,
            patient_name: patient_name.to_string(),
        }
    }
}

impl SavePathPicker for PromptPathPicker<'_> {
    fn pick_save_path(&mut self) -> TechNoteResult<Option<PathBuf>> {
        let suggested = self.config.suggested_export_path(&self.patient_name);
        let input: String = Input::new()
            .with_prompt("Save As (blank to cancel)")
            .with_initial_text(suggested.to_string_lossy())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TechNoteError::PathSelection(e.to_string()))?;

        normalise_save_path(&input)
    }
}

/// Notice for an editor that could not be started or exited abnormally.
pub fn editor_error_notice(error: &dialoguer::Error) -> Notice {
    Notice::new(Severity::Error, GENERATION_ERROR_TITLE, error.to_string())
}

/// Open the displayed narrative in the user's editor.
///
/// `Ok(None)` means the user quit without saving. An editor failure becomes a notice so
/// the form and its values survive.
pub fn edit_narrative(current: &str) -> Result<Option<String>, Notice> {
    Editor::new()
        .edit(current)
        .map_err(|e| editor_error_notice(&e))
}

/// Print a notice the way a message box would present it.
pub fn show_notice(notice: &Notice) {
    let title = match notice.severity {
        Severity::Error => style(notice.title.as_str()).red().bold(),
        Severity::Warning => style(notice.title.as_str()).yellow().bold(),
        Severity::Info => style(notice.title.as_str()).green().bold(),
    };
    match notice.severity {
        Severity::Info => println!("\n  {}\n  {}\n", title, notice.message.replace('\n', "\n  ")),
        Severity::Error | Severity::Warning => {
            eprintln!("\n  {}\n  {}\n", title, notice.message.replace('\n', "\n  "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_dates_and_blank() {
        assert!(validate_date("2024-01-01").is_ok());
        assert!(validate_date("  1980-05-05 ").is_ok());
        assert!(validate_date("").is_ok());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(validate_date("2024-02-30").is_err());
        assert!(validate_date("01/05/1980").is_err());
        assert!(validate_date("yesterday").is_err());
    }

    #[test]
    fn missing_editor_becomes_error_notice() {
        let error = dialoguer::Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));

        let notice = editor_error_notice(&error);

        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "IO error: No such file or directory");
    }

    #[test]
    fn finds_current_choice() {
        let choices = ["Yes", "No", "Unknown"];
        assert_eq!(choice_index(&choices, "Unknown"), Some(2));
        assert_eq!(choice_index(&choices, "unknown"), None);
    }
}
