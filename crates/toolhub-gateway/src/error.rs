//! Maps transport failures and HTTP status codes into `AppError`.

use reqwest::StatusCode;

use toolhub_core::error::{AppError, ErrorKind};

/// Wraps a reqwest failure (connect, timeout, body decode).
pub fn transport_error(err: reqwest::Error, target: &str) -> AppError {
    let kind = if err.is_decode() {
        ErrorKind::Serialization
    } else {
        ErrorKind::ExternalService
    };
    AppError::with_source(kind, format!("Request to {target} failed: {err}"), err)
}

/// Classifies a non-success HTTP status.
pub fn status_error(status: StatusCode, target: &str) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::not_found(format!("{target} returned 404 Not Found")),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::authentication(format!("{target} rejected credentials ({status})"))
        }
        _ => AppError::external(format!("{target} returned {status}")),
    }
}
