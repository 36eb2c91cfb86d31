//! Utilities Module
//!
//! Shared utilities for error handling, security and validation used
//! throughout the catalog service.

pub mod error;
pub mod security;
pub mod validation;

// Re-export commonly used utilities
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use security::*;
pub use validation::*;
