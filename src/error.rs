use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON envelope shared by every error response.
///
/// All failures are reported synchronously in the response body with
/// `success: false`. The `error` field carries the underlying store error
/// text for 500 responses and is omitted otherwise.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Application-level error mapped onto HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request body → 400 with a human-readable reason.
    BadRequest { message: String },
    /// Missing or invalid bearer credential → 403 with a fixed message.
    Forbidden,
    /// Unknown record identifier → 404 with a fixed message.
    NotFound { message: String },
    /// Persistence-layer failure → 500 with the underlying error text echoed.
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Unauthorized: Invalid API key".to_string(),
                None,
            ),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::Internal { message, detail } => {
                tracing::error!(error = %detail, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message, Some(detail))
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            error,
        };

        (status, Json(body)).into_response()
    }
}

/// Failure at the record store boundary.
///
/// Shape-rule violations are detected before the driver call but belong to
/// the persistence boundary, so both variants surface to callers as 500.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A document failed the schema shape rules.
    #[error("{0}")]
    Validation(String),

    /// MongoDB driver error (connectivity, write failure, ...).
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    /// A stored document could not be encoded or decoded.
    #[error("invalid booking document: {0}")]
    Codec(String),
}
