//! Error taxonomy for the import pipeline.
//!
//! Record-level ([`ValidationError`], [`NormalizeError`], [`SinkError`]) and
//! file-level ([`FileError`]) errors are collected into the batch result and never
//! stop the run. Only a [`FatalError`] aborts it.

use std::path::PathBuf;

use buscadis_catalog::Category;
use buscadis_db::OperationError;
use thiserror::Error;

/// A record was rejected before normalization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Invalid category '{value}'. Valid categories: {}", Category::valid_names())]
    InvalidCategory { value: String },
    #[error("Invalid price: {0} (must be a number >= 0)")]
    InvalidPrice(String),
    #[error("Record is not a JSON object")]
    NotAnObject,
}

/// A validated record could not be assembled into the canonical schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Field '{field}' has the wrong type: expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

impl NormalizeError {
    pub(crate) fn wrong_type(field: &'static str, expected: &'static str) -> Self {
        Self::WrongType { field, expected }
    }
}

/// The sink failed to persist one publication.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Database error: {0}")]
    Database(#[from] OperationError),
    #[error("{0}")]
    Rejected(String),
}

/// An input file could not be turned into records.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("{path}: expected a JSON array or object at the top level")]
    UnexpectedShape { path: String },
}

/// Aborts the whole run.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("Source path not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Failed to list {path}: {source}")]
    SourceUnreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("No JSON files found in {}", .0.display())]
    NoInputFiles(PathBuf),
    #[error("Sink unavailable: {0}")]
    SinkUnavailable(String),
    #[error("Import cancelled")]
    Cancelled,
    #[error("Confirmation prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}
