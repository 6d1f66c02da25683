//! Unified application error type.
//! All modules (db, core, cli, manifest) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("No departure found with id {0}")]
    DepartureNotFound(i64),

    #[error("Departure {0} has already returned")]
    AlreadyReturned(i64),

    // ---------------------------
    // Manifest errors
    // ---------------------------
    #[error("Manifest import error: {0}")]
    Import(String),

    #[error("Manifest export error: {0}")]
    Export(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Import(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
