//! Error Handling Utilities
//!
//! Canonical error taxonomy for the catalog service. Every failure a service
//! can raise maps to exactly one kind here, and the transport boundary maps
//! each kind to an HTTP status and a caller-facing message. Validation and
//! authorization failures propagate unmodified from the point of detection;
//! only the first validation failure is ever reported.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Canonical caller-facing error messages.
///
/// This is the single authoritative message table; services reference these
/// constants instead of declaring their own copies.
pub mod messages {
    pub const INVALID_NAME: &str = "Invalid name";
    pub const INVALID_PRICE: &str = "Invalid price";
    pub const INVALID_DISCOUNT: &str = "Invalid discount";
    pub const INVALID_EMAIL: &str = "Invalid email";
    pub const EMAIL_ALREADY_IN_USE: &str = "Email already in use";
    pub const INVALID_PASSWORD: &str = "Invalid password";
    pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
    pub const CATEGORY_ALREADY_EXISTS: &str = "Category already exists";
    pub const PRODUCT_NAME_TAKEN: &str = "Product name already in use";
    pub const PRODUCT_NOT_FOUND: &str = "Product not found";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const CATEGORY_NOT_FOUND: &str = "Category not found";
    pub const INCORRECT_LOGIN: &str = "Incorrect email or password";
    pub const INVALID_TOKEN: &str = "Invalid token";
    pub const MISSING_IDENTITY: &str = "User identity not found";
}

/// Main application error type shared by services, repositories and handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Payload failed validation, or a referenced category name does not exist
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Ownership mismatch or missing/invalid bearer credential
    #[error("Unauthorized")]
    Unauthorized,

    /// Referenced entity does not exist, or login credentials match no user
    #[error("Not found: {0}")]
    NotFound(String),

    /// A store-level uniqueness constraint rejected the write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing errors
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(String),

    /// Anything else; surfaced with a generic message
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Standard error response structure for API endpoints
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Database(e) => {
                log::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            ApiError::Hashing(e) => {
                log::error!("password hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "HASHING_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
            ApiError::Token(e) => {
                log::error!("token signing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TOKEN_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
            ApiError::Internal(e) => {
                log::error!("internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let error_response = ErrorResponse::new(error_code, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for operations that can return ApiError
pub type ApiResult<T> = Result<T, ApiError>;
