//! Unified application error type.
//! All modules (db, repository, core, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use crate::core::validation::FieldErrors;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Remote store
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote store returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("No session: {0}")]
    MissingSession(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    // ---------------------------
    // Parsing / input
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Remote {
            status: 401,
            message: "JWT expired".to_string(),
        };
        assert_eq!(err.to_string(), "Remote store returned 401: JWT expired");

        let err = AppError::not_found("workout", "abc");
        assert_eq!(err.to_string(), "workout not found: abc");

        let mut fields = FieldErrors::default();
        fields.insert("title", "Workout title is required");
        let err = AppError::Validation(fields);
        assert_eq!(
            err.to_string(),
            "Invalid input: title: Workout title is required"
        );
    }
}
