//! Checker-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Failed to acquire browser session: {message}")]
    SessionAcquisition { message: String },

    #[error("Session fault before any branch was checked: {message}")]
    SessionFault { message: String },

    #[error("Page query failed: {message}")]
    PageQuery { message: String },

    #[error("Report delivery failed: {message}")]
    ReportDelivery { message: String },

    #[error("Configuration error: {field}: {message}")]
    Configuration { field: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckerError {
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        CheckerError::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn page(message: impl Into<String>) -> Self {
        CheckerError::PageQuery {
            message: message.into(),
        }
    }
}

pub type CheckerResult<T> = Result<T, CheckerError>;
