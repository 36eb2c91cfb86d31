//! User Service
//!
//! Signup, profile updates and user listing. Signup hashes the password with
//! bcrypt before persisting; updates are restricted to the caller's own row
//! (the identity comes from the verified token, not the payload).

use std::sync::Arc;

use crate::models::auth::CurrentUser;
use crate::models::requests::{CreateUserRequest, UpdateUserRequest};
use crate::models::responses::{ProductResponse, UserResponse, UserWithProductsResponse};
use crate::models::user::NewUser;
use crate::repository::{ProductRepository, UserRepository};
use crate::utils::error::{messages, ApiError, ApiResult};
use crate::utils::security::hash_password;
use crate::utils::validation::{validate_new_user, validate_user_update};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { users, products }
    }

    pub async fn list(&self) -> ApiResult<Vec<UserResponse>> {
        let users = self.users.all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> ApiResult<UserWithProductsResponse> {
        let user = self
            .users
            .by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::USER_NOT_FOUND.into()))?;

        let products = self.products.by_owner(user.id).await?;
        Ok(UserWithProductsResponse::new(&user, &products))
    }

    /// Products owned by the authenticated caller.
    pub async fn products_of(&self, caller: &CurrentUser) -> ApiResult<Vec<ProductResponse>> {
        let products = self.products.by_owner(caller.id).await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    pub async fn create(&self, request: CreateUserRequest) -> ApiResult<UserWithProductsResponse> {
        validate_new_user(&*self.users, &request).await?;

        let password_hash = hash_password(&request.password)?;
        let user = self
            .users
            .insert(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await?;

        Ok(UserWithProductsResponse::new(&user, &[]))
    }

    /// Updates the caller's own name and email.
    pub async fn update(
        &self,
        caller: &CurrentUser,
        request: UpdateUserRequest,
    ) -> ApiResult<UserResponse> {
        // Uniqueness excludes the caller's own row, so keeping the current
        // email is always allowed.
        validate_user_update(&*self.users, &request, caller.id).await?;

        let mut user = self
            .users
            .by_id(caller.id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::USER_NOT_FOUND.into()))?;

        user.name = request.name;
        user.email = request.email;
        self.users.update(&user).await?;

        Ok(UserResponse::from(&user))
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let user = self
            .users
            .by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::USER_NOT_FOUND.into()))?;

        // Owned products are cascade-deleted by the store.
        self.users.delete(user.id).await
    }
}
