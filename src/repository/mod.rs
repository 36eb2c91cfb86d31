//! Repository Layer
//!
//! Store access behind object-safe traits so the service layer can be
//! exercised against in-memory doubles in tests while production wires in
//! the Postgres implementations.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::models::category::Category;
use crate::models::product::{NewProduct, Product, ProductWithOwner};
use crate::models::user::{NewUser, User};
use crate::utils::error::ApiResult;

/// User persistence operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn all(&self) -> ApiResult<Vec<User>>;
    async fn by_id(&self, id: i64) -> ApiResult<Option<User>>;
    /// Exact-match lookup, used by sign-in.
    async fn by_email(&self, email: &str) -> ApiResult<Option<User>>;
    /// Case-insensitive uniqueness probe; `exclude_id` is 0 when no row
    /// should be excluded.
    async fn email_in_use(&self, email: &str, exclude_id: i64) -> ApiResult<bool>;
    async fn insert(&self, user: NewUser) -> ApiResult<User>;
    async fn update(&self, user: &User) -> ApiResult<()>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Product persistence operations.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn all_with_owners(&self) -> ApiResult<Vec<ProductWithOwner>>;
    async fn by_id(&self, id: i64) -> ApiResult<Option<Product>>;
    async fn by_id_with_owner(&self, id: i64) -> ApiResult<Option<ProductWithOwner>>;
    async fn by_owner(&self, user_id: i64) -> ApiResult<Vec<Product>>;
    /// Products associated with every one of the given category names
    /// (case-insensitive).
    async fn by_category_names(&self, names: &[String]) -> ApiResult<Vec<ProductWithOwner>>;
    async fn categories_of(&self, product_id: i64) -> ApiResult<Vec<Category>>;
    async fn insert(&self, product: NewProduct) -> ApiResult<Product>;
    async fn update(&self, product: &Product) -> ApiResult<()>;
    /// Adds the given categories to the product's association set. Already
    /// attached categories are left untouched.
    async fn attach_categories(&self, product_id: i64, category_ids: &[i64]) -> ApiResult<()>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Category persistence operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn all(&self) -> ApiResult<Vec<Category>>;
    async fn by_id(&self, id: i64) -> ApiResult<Option<Category>>;
    /// Case-insensitive lookup by name.
    async fn by_name(&self, name: &str) -> ApiResult<Option<Category>>;
    /// Case-insensitive uniqueness probe; `exclude_id` is 0 when no row
    /// should be excluded.
    async fn name_in_use(&self, name: &str, exclude_id: i64) -> ApiResult<bool>;
    async fn insert(&self, name: &str) -> ApiResult<Category>;
    async fn update(&self, category: &Category) -> ApiResult<()>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

pub use postgres::{PgCategoryRepository, PgProductRepository, PgUserRepository};
