//! Error types raised while loading a dataset.
//!
//! Only required-path failures become errors. Missing optional tables,
//! columns, and unparsable optional values are absorbed where they occur and
//! never reach the caller.
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::LogicalTable;

/// Errors surfaced by the public loading entry points.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("database not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("invalid {expected} in '{table}.{column}': {value}")]
    InvalidValue {
        table: String,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset state lock was poisoned")]
    LockPoisoned,
}

/// A required logical table or column could not be found under any synonym.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error(
        "expected table '{table}' (synonyms: {}) not found; available: {}",
        .synonyms.join(", "),
        list_or_none(.available)
    )]
    MissingTable {
        table: LogicalTable,
        synonyms: &'static [&'static str],
        available: Vec<String>,
    },

    #[error(
        "missing required columns on '{table}': {} (have: {})",
        .missing.join(", "),
        list_or_none(.available)
    )]
    MissingColumns {
        table: String,
        missing: Vec<&'static str>,
        available: Vec<String>,
    },
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "<none>".to_string()
    } else {
        names.join(", ")
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
