//! Error types for plan generation and export.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::{export::Format, models::Language};

/// Comprehensive error type for all Pacer operations.
#[derive(Error, Debug)]
pub enum PacerError {
    /// Profile values out of range or missing
    #[error("Invalid profile field '{field}': {reason}")]
    InvalidProfile { field: String, reason: String },
    /// Plan configuration values out of range or inconsistent
    #[error("Invalid plan configuration '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
    /// A required localization key has no entry for the language
    #[error("Missing translation for key '{key}' in language '{language}'")]
    MissingTranslation { key: String, language: Language },
    /// A single exporter could not produce its artifact
    #[error("Export to {format} failed: {reason}")]
    Export { format: Format, reason: String },
    /// A progress log row that cannot be read
    #[error("Invalid progress log at row {row}: {reason}")]
    InvalidProgress { row: usize, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for field validation errors.
pub struct FieldErrorBuilder {
    field: String,
    profile: bool,
}

impl FieldErrorBuilder {
    fn new(field: impl Into<String>, profile: bool) -> Self {
        Self {
            field: field.into(),
            profile,
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PacerError {
        let reason = reason.into();
        if self.profile {
            PacerError::InvalidProfile {
                field: self.field,
                reason,
            }
        } else {
            PacerError::InvalidConfig {
                field: self.field,
                reason,
            }
        }
    }
}

/// Builder for per-format export errors.
pub struct ExportErrorBuilder {
    format: Format,
}

impl ExportErrorBuilder {
    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl fmt::Display) -> PacerError {
        PacerError::Export {
            format: self.format,
            reason: reason.to_string(),
        }
    }
}

impl PacerError {
    /// Creates a builder for profile validation errors.
    pub fn invalid_profile(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder::new(field, true)
    }

    /// Creates a builder for plan configuration errors.
    pub fn invalid_config(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder::new(field, false)
    }

    /// Creates a builder for errors raised by the exporter for `format`.
    pub fn export(format: Format) -> ExportErrorBuilder {
        ExportErrorBuilder { format }
    }

    /// True for errors that must stop a run before any artifact is produced.
    pub fn is_build_failure(&self) -> bool {
        matches!(
            self,
            PacerError::InvalidProfile { .. }
                | PacerError::InvalidConfig { .. }
                | PacerError::MissingTranslation { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to PacerError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Map any error into an export failure for `format`.
    fn export_context(self, format: Format) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PacerError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn export_context(self, format: Format) -> Result<T> {
        self.map_err(|e| PacerError::export(format).with_reason(e))
    }
}

/// Result type alias for Pacer operations
pub type Result<T> = std::result::Result<T, PacerError>;
