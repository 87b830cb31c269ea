use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinutasError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error: {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumnsError { missing: Vec<String> },

    #[error("Row {row}: {reason}")]
    RowError { row: usize, reason: String },

    #[error("Not found: {what}")]
    NotFoundError { what: String },
}

impl MinutasError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        MinutasError::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn row(row: usize, reason: impl Into<String>) -> Self {
        MinutasError::RowError {
            row,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MinutasError>;
