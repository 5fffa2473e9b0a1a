//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use crate::config::AppConfig;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use placeholder_api_shared::{AuthError, ErrorResponse, FieldError};
use thiserror::Error;
use tracing::{debug, error};
use validator::{ValidationErrors, ValidationErrorsKind};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Missing, invalid or expired credentials (401)
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated caller lacks ownership or role (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidFields(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error category returned in the `error` field
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) | ApiError::InvalidFields(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Unauthenticated(_) => "UNAUTHENTICATED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Internal(_) | ApiError::Database(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Unauthenticated(err.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict("A record with this data already exists".to_string())
            }
            _ => ApiError::Database(err),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    /// Repositories return `anyhow`; recover the database error underneath
    /// so constraint violations keep their meaning.
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<sqlx::Error>() {
            Ok(db) => db.into(),
            Err(err) => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match &self {
            ApiError::Validation(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthenticated(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Conflict(msg)
            | ApiError::BadRequest(msg) => (msg.clone(), None),
            ApiError::InvalidFields(errors) => (
                "Request validation failed".to_string(),
                Some(field_errors(errors)),
            ),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (redact(err.to_string()), None)
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (redact(err.to_string()), None)
            }
        };

        if status.is_client_error() {
            debug!(status = status.as_u16(), code, %message, "Request rejected");
        }
        metrics::counter!("http_errors_total", "code" => code).increment(1);

        let body = Json(ErrorResponse {
            success: false,
            error: code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Hide internal failure detail unless running in development mode
fn redact(detail: String) -> String {
    if AppConfig::is_development() {
        detail
    } else {
        "Something went wrong".to_string()
    }
}

/// Flatten validator output into a stable, sorted field list
///
/// Nested structs (address, company) report as `address.street`.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut details = Vec::new();
    collect_field_errors(errors, None, &mut details);

    if details.is_empty() {
        details.push(FieldError {
            field: "body".to_string(),
            message: errors.to_string(),
        });
    }

    details.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    details
}

fn collect_field_errors(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut Vec<FieldError>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError {
                    field: path.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("is invalid ({})", e.code)),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_field_errors(nested, Some(&path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
