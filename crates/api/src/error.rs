use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for failures of
/// the backing catalog file. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing catalog file could not be read, parsed, or written.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                // The duplicate-id contract is 400, not 409.
                CoreError::AlreadyExists { .. } => {
                    (StatusCode::BAD_REQUEST, "ALREADY_EXISTS", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::InvalidArgument(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", msg.clone())
                }
                CoreError::PageOutOfRange {
                    total_pages,
                    current_page,
                    total_items,
                } => {
                    // Carries the pagination diagnostics clients need to
                    // recover, alongside the standard fields.
                    let body = json!({
                        "error": "Page not found",
                        "code": "PAGE_OUT_OF_RANGE",
                        "total_pages": total_pages,
                        "current_page": current_page,
                        "total_items": total_items,
                    });
                    return (StatusCode::NOT_FOUND, axum::Json(body)).into_response();
                }
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Movie catalog unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORAGE_UNAVAILABLE",
                    "The movie catalog is temporarily unavailable".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
