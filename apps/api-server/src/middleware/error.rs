//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{PostServiceError, PostValidationError};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
    Unavailable(String),
    Validation {
        detail: String,
        errors: serde_json::Value,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Unavailable(msg) => write!(f, "Service unavailable: {}", msg),
            AppError::Validation { detail, errors } => {
                write!(f, "Validation errors: {} {}", detail, errors)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            AppError::Unavailable(detail) => {
                tracing::error!("Dependency unavailable: {}", detail);
                ErrorResponse::service_unavailable()
            }
            AppError::Validation { detail, errors } => {
                ErrorResponse::bad_request(detail).with_errors(errors.clone())
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from post service errors
impl From<PostServiceError> for AppError {
    fn from(err: PostServiceError) -> Self {
        match err {
            PostServiceError::Validation(PostValidationError::InvalidPost(violations)) => {
                AppError::Validation {
                    detail: "Invalid post. Please correct the errors and try again.".to_string(),
                    errors: serde_json::to_value(&violations).unwrap_or_default(),
                }
            }
            PostServiceError::Validation(PostValidationError::NotFoundPost { id }) => {
                AppError::NotFound(format!("Post with id {} not found", id))
            }
            PostServiceError::Validation(validation) => AppError::BadRequest(validation.to_string()),
            PostServiceError::DependencyValidation(source) => AppError::Conflict(source.to_string()),
            PostServiceError::Dependency(source) => AppError::Internal(source.to_string()),
            PostServiceError::CriticalDependency(source) => {
                AppError::Unavailable(source.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
