//! Bearer Authentication
//!
//! Extractor that gates the authenticated routes. It reads the Authorization
//! header, verifies the bearer credential, and yields the caller identity
//! from the token claims. A missing or malformed header and a failed
//! verification all collapse to Unauthorized; a verified token without a
//! usable identity claim is reported separately (NotFound).

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::api::handlers::AppState;
use crate::models::auth::CurrentUser;
use crate::utils::error::ApiError;

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        let claims = state.tokens.verify(token)?;
        CurrentUser::from_claims(&claims)
    }
}
