use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProcessingError {
    /// Pipeline stage the error belongs to, used in the top-level message.
    pub fn stage(&self) -> &'static str {
        match self {
            ProcessingError::FileNotFound { .. }
            | ProcessingError::Csv(_)
            | ProcessingError::Parse(_)
            | ProcessingError::Io(_) => "load",
            ProcessingError::Schema(_) => "transform",
            ProcessingError::Arrow(_) => "preview",
            ProcessingError::Write { .. } => "save",
            ProcessingError::Json(_) => "report",
            ProcessingError::LogFile { .. } => "logging",
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProcessingError::Write {
            path: path.into(),
            source,
        }
    }
}
