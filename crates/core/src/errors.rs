use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Timetable not found for section {0}")]
    MissingExportTarget(String),

    #[error("Export failed: {0}")]
    ExportEncodingFailure(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
