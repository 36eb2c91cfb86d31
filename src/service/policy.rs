//! Ownership Policy
//!
//! Decides whether the authenticated caller may mutate a given resource.
//! Products may only be mutated by their owning user; a user may only mutate
//! their own row. Categories deliberately carry no ownership check.
//! A mismatch is reported as a bare Unauthorized with no further detail.

use crate::models::auth::CurrentUser;
use crate::utils::error::{ApiError, ApiResult};

/// Ensures the caller owns the resource identified by `owner_id`.
pub fn ensure_owner(owner_id: i64, caller: &CurrentUser) -> ApiResult<()> {
    if owner_id != caller.id {
        return Err(ApiError::Unauthorized);
    }
    Ok(())
}
