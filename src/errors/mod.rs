use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::constants::ERR_EMAIL_EXISTS;
use crate::models::ErrorResponse;

/// Application error type, translated to HTTP responses at the transport
/// boundary via [`ResponseError`].
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    ValidationError(Vec<String>),
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::Conflict(message) => HttpResponse::Conflict().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors.clone()),
            }),
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    success: false,
                    message: message.clone(),
                    errors: None,
                })
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // The UNIQUE index on users.email is the true enforcement point for
        // email uniqueness; a racing insert that passes the service-level
        // pre-check still surfaces as a conflict here.
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return ApiError::Conflict(ERR_EMAIL_EXISTS.to_string());
            }
        }
        ApiError::InternalServerError(err.to_string())
    }
}
