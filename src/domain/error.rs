use std::io;

use thiserror::Error;

use crate::domain::OutputFormat;
use crate::ports::HostError;

/// Library-wide error type for charforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Missing or invalid selection in the generation request.
    #[error("{0}")]
    Configuration(String),

    /// The selected connection profile does not exist.
    #[error("Connection profile '{0}' not found")]
    ProfileNotFound(String),

    /// A prompt template could not be compiled.
    #[error("Invalid prompt template '{template}': {reason}")]
    TemplateSyntax { template: String, reason: String },

    /// A prompt template failed while rendering.
    #[error("Failed to render prompt template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Failure reported by the chat host or its model backend.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Model output did not match the declared output format.
    #[error("Failed to parse {format} response: {details}")]
    ResponseParse { format: OutputFormat, details: String },

    /// Configuration file contents are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input file parse error.
    #[error("Failed to parse {what}: {details}")]
    InputParse { what: String, details: String },

    /// Built-in assets are missing or malformed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn response_parse<S: Into<String>>(format: OutputFormat, details: S) -> Self {
        AppError::ResponseParse { format, details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TemplateSyntax { .. }
            | AppError::InvalidConfig(_)
            | AppError::InputParse { .. } => io::ErrorKind::InvalidInput,
            AppError::ProfileNotFound(_) => io::ErrorKind::NotFound,
            AppError::ResponseParse { .. } => io::ErrorKind::InvalidData,
            AppError::TemplateRender { .. } | AppError::Host(_) | AppError::Internal(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
