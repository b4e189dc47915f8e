//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP responses. Every failure is reported to the
//! client as `400 Bad Request` with a JSON body of the form
//! `{"error": "<message>"}`.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;
use tutorhub_core::errors::TutorError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use tutorhub_api::middleware::error_handling::AppError;
/// use tutorhub_core::errors::TutorError;
///
/// async fn handler(subject: Option<String>) -> Result<Json<String>, AppError> {
///     let subject = subject.ok_or_else(|| TutorError::validation("Missing filters"))?;
///     Ok(Json(subject))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TutorError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TutorError::Validation(_) => StatusCode::BAD_REQUEST,
            TutorError::Storage(report) => {
                warn!("Storage failure: {:#}", report);
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(json!({ "error": self.0.to_string() }));

        (status, body).into_response()
    }
}

impl From<TutorError> for AppError {
    fn from(err: TutorError) -> Self {
        AppError(err)
    }
}

/// Storage layer failures arrive as `eyre::Report`
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TutorError::Storage(err))
    }
}

/// Malformed or mistyped JSON bodies are validation failures
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(TutorError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(TutorError::Validation(rejection.body_text()))
    }
}

/// Maps a TutorError to an HTTP response
pub fn map_error(err: TutorError) -> Response {
    AppError(err).into_response()
}
