//! User Model
//!
//! Internal user representation, including the bcrypt password hash. Never
//! serialized directly; API responses use the projections in
//! [`crate::models::responses`], which omit the hash.

use sqlx::FromRow;

/// A user row as stored. Owns zero or more products.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique case-insensitively across all users
    pub email: String,
    pub password_hash: String,
}

/// Fields required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
