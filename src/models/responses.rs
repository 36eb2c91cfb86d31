//! Response Models
//!
//! Projections returned by the API. None of these expose the password hash;
//! related entities (owner, categories, products) are embedded where the
//! endpoint contract includes them.

use serde::Serialize;

use crate::models::category::Category;
use crate::models::product::{Product, ProductWithOwner};
use crate::models::user::User;

/// Sign-in result: the bearer credential
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub token: String,
}

/// User projection without related entities
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// User projection including owned products
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithProductsResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub products: Vec<ProductResponse>,
}

impl UserWithProductsResponse {
    pub fn new(user: &User, products: &[Product]) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            products: products.iter().map(ProductResponse::from).collect(),
        }
    }
}

/// Product projection carrying the owning user id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub user_id: i64,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            discount: product.discount,
            user_id: product.user_id,
        }
    }
}

/// Product projection with the owner embedded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithUserResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub user: UserResponse,
}

impl From<&ProductWithOwner> for ProductWithUserResponse {
    fn from(entry: &ProductWithOwner) -> Self {
        Self {
            id: entry.product.id,
            name: entry.product.name.clone(),
            price: entry.product.price,
            discount: entry.product.discount,
            user: UserResponse::from(&entry.owner),
        }
    }
}

/// Product projection with the owner and attached categories embedded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithUserAndCategoriesResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub user: UserResponse,
    pub categories: Vec<CategoryResponse>,
}

impl ProductWithUserAndCategoriesResponse {
    pub fn new(entry: &ProductWithOwner, categories: &[Category]) -> Self {
        Self {
            id: entry.product.id,
            name: entry.product.name.clone(),
            price: entry.product.price,
            discount: entry.product.discount,
            user: UserResponse::from(&entry.owner),
            categories: categories.iter().map(CategoryResponse::from).collect(),
        }
    }
}

/// Category projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}
