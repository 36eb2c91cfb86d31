//! Product Model

use sqlx::FromRow;

use crate::models::user::User;

/// A product row as stored. The owning user id is immutable after creation.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    /// Globally unique (store default collation)
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub user_id: i64,
}

/// Fields required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub user_id: i64,
}

/// A product joined with its owning user.
#[derive(Debug, Clone)]
pub struct ProductWithOwner {
    pub product: Product,
    pub owner: User,
}
