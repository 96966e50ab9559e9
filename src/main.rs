mod prompt;

use console::style;
use dialoguer::Select;
use std::path::PathBuf;
use technote_core::{CoreConfig, DocxWriter, FormSession, IntakeField};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompt::{edit_narrative, prompt_all, prompt_field, show_notice, PromptPathPicker};

/// Info-level export logs would repeat the success notice between prompts.
const DEFAULT_LOG_DIRECTIVE: &str = "technote=warn";

const MENU: &[&str] = &[
    "Fill in all fields",
    "Edit one field",
    "Generate Tech Note",
    "Edit generated narrative",
    "Export to .docx",
    "Quit",
];

/// Interactive sleep study tech note form.
///
/// Walks the user through the intake fields, shows the generated narrative and exports it
/// on request. Runs until the user picks "Quit" or interrupts the prompt.
///
/// # Environment Variables
/// - `TECHNOTE_EXPORT_DIR`: directory offered by the save prompt (default: current directory)
/// - `RUST_LOG`: log filter (default: "technote=warn")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let export_dir = std::env::var_os("TECHNOTE_EXPORT_DIR").map(PathBuf::from);
    let config = CoreConfig::from_export_dir_override(export_dir)?;
    tracing::debug!("++ Exporting to {}", config.export_dir().display());

    let writer = DocxWriter::new();
    let mut session = FormSession::new();

    println!("{}", style("Sleep Study Tech Note Generator").bold());

    loop {
        let choice = Select::new()
            .with_prompt("Action")
            .items(MENU)
            .default(0)
            .interact()?;

        match MENU[choice] {
            "Fill in all fields" => prompt_all(session.record_mut())?,
            "Edit one field" => {
                let labels: Vec<&str> = IntakeField::ALL.iter().map(|f| f.form_label()).collect();
                let index = Select::new()
                    .with_prompt("Field")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let field = IntakeField::ALL[index];
                let value = prompt_field(field, session.record().get(field))?;
                session.set_field(field, value);
            }
            "Generate Tech Note" => {
                let text = session.generate();
                println!("\n{}\n", style("Generated Narrative:").bold());
                println!("{}\n", text);
            }
            "Edit generated narrative" => {
                match edit_narrative(session.displayed_text()) {
                    Ok(Some(edited)) => session.set_displayed_text(edited),
                    Ok(None) => {}
                    Err(notice) => show_notice(&notice),
                }
            }
            "Export to .docx" => {
                let mut picker = PromptPathPicker::new(&config, &session.record().patient_name);
                if let Some(notice) = session.export(&mut picker, &writer) {
                    show_notice(&notice);
                }
            }
            _ => break,
        }
    }

    Ok(())
}
