//! Auth Service
//!
//! Sign-in and token introspection. Sign-in reports the same error for an
//! unknown email and a wrong password so callers cannot distinguish the two.

use std::sync::Arc;

use crate::models::auth::CurrentUser;
use crate::models::requests::SignInRequest;
use crate::models::responses::{SignInResponse, UserResponse};
use crate::repository::UserRepository;
use crate::service::token::TokenService;
use crate::utils::error::{messages, ApiError, ApiResult};
use crate::utils::security::verify_password;

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    pub async fn sign_in(&self, request: SignInRequest) -> ApiResult<SignInResponse> {
        let user = self
            .users
            .by_email(&request.email)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::INCORRECT_LOGIN.into()))?;

        let matches = verify_password(&request.password, &user.password_hash)?;
        if !matches {
            return Err(ApiError::NotFound(messages::INCORRECT_LOGIN.into()));
        }

        let token = self.tokens.issue(&user)?;
        Ok(SignInResponse { token })
    }

    /// Returns the projection of the user the verified token belongs to. A
    /// token whose user row no longer exists is reported as an invalid token.
    pub async fn authenticate(&self, caller: &CurrentUser) -> ApiResult<UserResponse> {
        let user = self
            .users
            .by_id(caller.id)
            .await?
            .ok_or_else(|| ApiError::BadRequest(messages::INVALID_TOKEN.into()))?;

        Ok(UserResponse::from(&user))
    }
}
