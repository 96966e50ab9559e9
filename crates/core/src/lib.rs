//! # Tech Note Core
//!
//! Core logic for the sleep study tech note generator.
//!
//! This crate contains the intake record, narrative generation and document export:
//! - [`IntakeRecord`]: the fixed set of clinical fields collected per visit
//! - [`narrative::generate`]: pure summary-and-sentence text generation
//! - [`export::export_text`]: paragraph-per-line export through picker and writer traits
//! - [`FormSession`]: presentation-owned state tying the two together
//!
//! **No presentation concerns**: prompts, dialogs and argument parsing belong in the
//! `technote-run` and `technote-cli` binaries.

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod export;
pub mod form;
pub mod intake;
pub mod narrative;
pub mod notice;

pub use config::CoreConfig;
pub use document::DocxWriter;
pub use error::{TechNoteError, TechNoteResult};
pub use export::{ExportOutcome, FixedPathPicker, SavePathPicker};
pub use form::FormSession;
pub use intake::{FieldKind, IntakeField, IntakeRecord};
pub use narrative::NarrativeText;
pub use notice::{Notice, Severity};
