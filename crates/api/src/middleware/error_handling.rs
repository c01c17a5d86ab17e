//! # Error Handling Middleware
//!
//! Maps timetable errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use timetable_core::errors::TimetableError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use timetable_api::middleware::error_handling::AppError;
/// use timetable_core::errors::TimetableError;
///
/// async fn handler(slots: &str) -> Result<Json<usize>, AppError> {
///     let slots = slots
///         .parse()
///         .map_err(|_| AppError(TimetableError::InvalidInput(slots.to_string())))?;
///     Ok(Json(slots))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TimetableError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TimetableError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TimetableError::NotFound(_) => StatusCode::NOT_FOUND,
            TimetableError::MissingExportTarget(_) => StatusCode::NOT_FOUND,
            TimetableError::ExportEncodingFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TimetableError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        if status.is_server_error() {
            error!(%status, "{}", message);
        }

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Allows `?` on `TimetableResult` inside handlers
impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        AppError(err)
    }
}

/// Unexpected failures surface as internal errors
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimetableError::Internal(err))
    }
}

/// Maps a TimetableError to an HTTP response
pub fn map_error(err: TimetableError) -> Response {
    AppError(err).into_response()
}
