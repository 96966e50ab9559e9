#[derive(Debug, thiserror::Error)]
pub enum TechNoteError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to select save path: {0}")]
    PathSelection(String),
    #[error("failed to read intake file: {0}")]
    IntakeRead(std::io::Error),
    #[error("failed to parse intake JSON: {0}")]
    IntakeJson(serde_json::Error),
    #[error("failed to parse intake YAML: {0}")]
    IntakeYaml(serde_yaml::Error),

    #[error("document error: {0}")]
    Docx(#[from] technote_docx::DocxError),
}

pub type TechNoteResult<T> = std::result::Result<T, TechNoteError>;
