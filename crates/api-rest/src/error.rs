use axum::http::StatusCode;
use clinidesk_core::ClinicError;

/// Handler error: a status code plus a message for the client.
pub(crate) type ApiError = (StatusCode, String);

/// Maps core errors onto HTTP responses.
///
/// Invalid input and missing records carry their message through; anything
/// else is logged and reported as an opaque internal error.
pub(crate) fn map_error(err: ClinicError) -> ApiError {
    match err {
        ClinicError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
        not_found @ ClinicError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, not_found.to_string())
        }
        other => {
            tracing::error!(error = ?other, "internal error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_owned())
        }
    }
}
