use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ideaboard_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds store and rendering
/// failures. Implements [`IntoResponse`] to produce HTML error pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ideaboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Render(#[from] tera::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => {
                tracing::debug!(entity, key = %key, "Not found");
                StatusCode::NOT_FOUND
            }
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::info!(error = %msg, "Rejected invalid input");
                StatusCode::BAD_REQUEST
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, views::error_page(status)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status.
///
/// - `RowNotFound` maps to 404.
/// - Check and not-null violations (`23514`, `23502`) map to 400: the
///   schema enforces the required idea fields.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> StatusCode {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
        sqlx::Error::Database(db_err) => {
            if matches!(db_err.code().as_deref(), Some("23514" | "23502")) {
                tracing::info!(error = %db_err, "Save rejected by schema constraint");
                return StatusCode::BAD_REQUEST;
            }
            tracing::error!(error = %db_err, "Database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        other => {
            tracing::error!(error = %other, "Database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
