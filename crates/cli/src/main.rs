use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use technote_core::{
    export::normalise_save_path, CoreConfig, DocxWriter, FieldKind, FixedPathPicker, FormSession,
    IntakeField, IntakeRecord, Notice, Severity, TechNoteResult,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "technote")]
#[command(about = "Sleep study tech note generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List intake fields and their suggested values
    Fields,
    /// Print the generated tech note
    Generate {
        #[command(flatten)]
        intake: IntakeArgs,
    },
    /// Generate the tech note and export it to a .docx file
    Export {
        #[command(flatten)]
        intake: IntakeArgs,
        /// Output path (".docx" is appended when no extension is given)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Directory for the default output file name
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}

/// Intake values. Flags override values read from `--intake`.
#[derive(Args, Debug, Default)]
struct IntakeArgs {
    /// YAML or JSON intake file
    #[arg(long)]
    intake: Option<PathBuf>,
    #[arg(long)]
    date_of_service: Option<String>,
    #[arg(long)]
    patient_name: Option<String>,
    /// Patient date of birth
    #[arg(long)]
    dob: Option<String>,
    #[arg(long)]
    referring_md: Option<String>,
    #[arg(long)]
    study_type: Option<String>,
    #[arg(long)]
    study_ran: Option<String>,
    #[arg(long)]
    mask_used: Option<String>,
    /// SPO2 nadir percentage, without the "%" sign
    #[arg(long)]
    spo2_nadir: Option<String>,
    /// Yes, No or Unknown
    #[arg(long)]
    sleep_issues: Option<String>,
    #[arg(long)]
    sleep_tech: Option<String>,
    #[arg(long)]
    location: Option<String>,
}

impl IntakeArgs {
    fn overrides(&self) -> [(IntakeField, &Option<String>); 11] {
        [
            (IntakeField::DateOfService, &self.date_of_service),
            (IntakeField::PatientName, &self.patient_name),
            (IntakeField::Dob, &self.dob),
            (IntakeField::ReferringMd, &self.referring_md),
            (IntakeField::StudyType, &self.study_type),
            (IntakeField::StudyRan, &self.study_ran),
            (IntakeField::MaskUsed, &self.mask_used),
            (IntakeField::Spo2Nadir, &self.spo2_nadir),
            (IntakeField::SleepIssues, &self.sleep_issues),
            (IntakeField::SleepTech, &self.sleep_tech),
            (IntakeField::Location, &self.location),
        ]
    }

    fn into_record(self) -> TechNoteResult<IntakeRecord> {
        let mut record = match &self.intake {
            Some(path) => IntakeRecord::from_path(path)?,
            None => IntakeRecord::default(),
        };
        for (field, value) in self.overrides() {
            if let Some(value) = value {
                record.set(field, value.as_str());
            }
        }
        Ok(record)
    }
}

fn show(notice: &Notice) {
    match notice.severity {
        Severity::Info => println!("{}", notice),
        Severity::Warning | Severity::Error => eprintln!("{}", notice),
    }
}

fn describe_kind(kind: FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Date => "date (YYYY-MM-DD)".to_string(),
        FieldKind::Suggested(choices) => format!("text, suggested: {}", choices.join(", ")),
        FieldKind::Exclusive(choices) => format!("one of: {}", choices.join(", ")),
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("technote=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fields) => {
            let defaults = IntakeRecord::default();
            for field in IntakeField::ALL {
                let default = defaults.get(field);
                let default = if default.is_empty() {
                    String::new()
                } else {
                    format!(" [default: {}]", default)
                };
                println!(
                    "--{:<16} {:<16} {}{}",
                    field.key().replace('_', "-"),
                    field.form_label(),
                    describe_kind(field.kind()),
                    default
                );
            }
        }
        Some(Commands::Generate { intake }) => {
            let record = match intake.into_record() {
                Ok(record) => record,
                Err(e) => {
                    show(&Notice::for_generation_error(&e));
                    return Ok(ExitCode::FAILURE);
                }
            };
            let mut session = FormSession::with_record(record);
            println!("{}", session.generate());
        }
        Some(Commands::Export {
            intake,
            output,
            export_dir,
        }) => {
            let record = match intake.into_record() {
                Ok(record) => record,
                Err(e) => {
                    show(&Notice::for_generation_error(&e));
                    return Ok(ExitCode::FAILURE);
                }
            };
            let path = match output {
                Some(output) => normalise_save_path(&output.to_string_lossy()),
                None => CoreConfig::from_export_dir_override(export_dir)
                    .map(|config| Some(config.suggested_export_path(&record.patient_name))),
            };
            let path = match path {
                Ok(path) => path,
                Err(e) => {
                    show(&Notice::for_export_error(&e));
                    return Ok(ExitCode::FAILURE);
                }
            };

            let mut session = FormSession::with_record(record);
            session.generate();
            let mut picker = FixedPathPicker::new(path);
            if let Some(notice) = session.export(&mut picker, &DocxWriter::new()) {
                show(&notice);
                if notice.severity == Severity::Error {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        None => {
            println!("Use 'technote --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "technote",
            "generate",
            "--patient-name",
            "Jane Doe",
            "--spo2-nadir",
            "88",
        ])
        .unwrap();

        let Some(Commands::Generate { intake }) = cli.command else {
            panic!("expected generate");
        };
        let record = intake.into_record().unwrap();
        assert_eq!(record.patient_name, "Jane Doe");
        assert_eq!(record.spo2_nadir, "88");
        assert_eq!(record.sleep_issues, "Unknown");
    }

    #[test]
    fn export_accepts_output_path() {
        let cli = Cli::try_parse_from([
            "technote",
            "export",
            "--location",
            "Home",
            "-o",
            "notes/jane",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Export {
                intake,
                output,
                export_dir,
            }) => {
                assert_eq!(intake.location.as_deref(), Some("Home"));
                assert_eq!(output, Some(PathBuf::from("notes/jane")));
                assert_eq!(export_dir, None);
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn every_field_has_a_flag() {
        let args = IntakeArgs::default();
        let fields: Vec<IntakeField> = args.overrides().iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, IntakeField::ALL.to_vec());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["technote", "generate", "--blood-type", "O"]).is_err());
    }
}
