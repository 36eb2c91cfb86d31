//! Validation Utilities
//!
//! Per-operation validation pipelines that gate create/update requests before
//! they reach persistence. Each pipeline checks its rules in a fixed order and
//! stops at the first violation, so the caller always sees one deterministic
//! error message. Uniqueness rules query the store with whatever data is
//! visible at validation time; the pre-check/write race is accepted and backed
//! by store-level unique constraints.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::requests::{CreateUserRequest, UpdateUserRequest};
use crate::repository::{CategoryRepository, UserRepository};
use crate::utils::error::{messages, ApiError, ApiResult};

/// Validates email address format
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(email)
}

/// Product create/update payload rules: name, then price, then discount.
pub fn validate_product(name: &str, price: f64, discount: f64) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest(messages::INVALID_NAME.into()));
    }
    if price < 0.0 {
        return Err(ApiError::BadRequest(messages::INVALID_PRICE.into()));
    }
    if discount < 0.0 {
        return Err(ApiError::BadRequest(messages::INVALID_DISCOUNT.into()));
    }
    Ok(())
}

/// Category create/update rules: non-empty name, then name uniqueness against
/// every other category (case-insensitive). `exclude_id` is 0 on create so no
/// row is excluded; on update it is the category being renamed.
pub async fn validate_category(
    categories: &dyn CategoryRepository,
    name: &str,
    exclude_id: i64,
) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest(messages::INVALID_NAME.into()));
    }
    if categories.name_in_use(name, exclude_id).await? {
        return Err(ApiError::BadRequest(messages::CATEGORY_ALREADY_EXISTS.into()));
    }
    Ok(())
}

/// User signup rules, in field declaration order: name, email syntax, email
/// uniqueness, password, password confirmation.
pub async fn validate_new_user(
    users: &dyn UserRepository,
    request: &CreateUserRequest,
) -> ApiResult<()> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest(messages::INVALID_NAME.into()));
    }
    if !validate_email(&request.email) {
        return Err(ApiError::BadRequest(messages::INVALID_EMAIL.into()));
    }
    if users.email_in_use(&request.email, 0).await? {
        return Err(ApiError::BadRequest(messages::EMAIL_ALREADY_IN_USE.into()));
    }
    if request.password.trim().is_empty() {
        return Err(ApiError::BadRequest(messages::INVALID_PASSWORD.into()));
    }
    if request.conf_password != request.password {
        return Err(ApiError::BadRequest(messages::PASSWORD_MISMATCH.into()));
    }
    Ok(())
}

/// User update rules: name, email syntax, email uniqueness excluding the
/// caller's own row.
pub async fn validate_user_update(
    users: &dyn UserRepository,
    request: &UpdateUserRequest,
    user_id: i64,
) -> ApiResult<()> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest(messages::INVALID_NAME.into()));
    }
    if !validate_email(&request.email) {
        return Err(ApiError::BadRequest(messages::INVALID_EMAIL.into()));
    }
    if users.email_in_use(&request.email, user_id).await? {
        return Err(ApiError::BadRequest(messages::EMAIL_ALREADY_IN_USE.into()));
    }
    Ok(())
}
