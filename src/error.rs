//! Application error type and its HTTP mapping.
//!
//! Validation failures are client errors (4xx) with a human-readable message.
//! Store failures become a generic 500; the underlying detail is logged but
//! never sent to the caller.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Machine-readable error information, as it appears in response bodies.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
    message: String,
}

/// Errors produced by services, repositories and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required input was absent or empty.
    #[error("{message}")]
    MissingField { message: String, details: Value },

    /// An input was present but malformed (e.g. not an http/https URL).
    #[error("{message}")]
    InvalidFormat { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Delete refused. Deliberately indistinguishable from an unknown code.
    #[error("{message}")]
    NotFoundOrUnauthorized { message: String, details: Value },

    /// Uniqueness constraint violated in the store.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Persistence failure, including an exhausted code allocation budget.
    #[error("{message}")]
    Store { message: String, details: Value },
}

impl AppError {
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            message: format!("{} is required", field),
            details: json!({ "field": field }),
        }
    }

    pub fn invalid_format(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn not_found_or_unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::NotFoundOrUnauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField { .. } | AppError::InvalidFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } | AppError::NotFoundOrUnauthorized { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the shape exposed to API callers.
    ///
    /// Store errors are reduced to a generic message.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::MissingField { message, .. } => ErrorInfo {
                code: "missing_field",
                message: message.clone(),
            },
            AppError::InvalidFormat { message, .. } => ErrorInfo {
                code: "invalid_format",
                message: message.clone(),
            },
            AppError::NotFound { message, .. }
            | AppError::NotFoundOrUnauthorized { message, .. } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
            },
            AppError::Conflict { message, .. } => ErrorInfo {
                code: "conflict",
                message: message.clone(),
            },
            AppError::Store { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store { message, details } = &self {
            tracing::error!(%message, %details, "Store error");
        }

        let status = self.status_code();
        let info = self.to_error_info();

        let body = ErrorBody {
            success: false,
            error: info.code,
            message: info.message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::store("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_format(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = AppError::missing_field("longUrl");
        assert_eq!(err.to_string(), "longUrl is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_format("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("gone", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::not_found_or_unauthorized("nope", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("dup", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::store("db down", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_variants_share_public_code() {
        let a = AppError::not_found("URL not found", json!({})).to_error_info();
        let b = AppError::not_found_or_unauthorized("URL not found", json!({})).to_error_info();
        assert_eq!(a.code, b.code);
        assert_eq!(a.message, b.message);
    }

    #[test]
    fn test_store_error_hides_detail() {
        let err = AppError::store(
            "Database error",
            json!({ "reason": "connection refused at 10.0.0.5" }),
        );
        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("10.0.0.5"));
    }
}
