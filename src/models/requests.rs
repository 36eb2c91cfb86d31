//! Request Models
//!
//! Data structures for API request payloads. Field names follow the wire
//! format (camelCase). Validation happens in the service layer so that rule
//! order, including store-backed uniqueness checks, stays deterministic.

use serde::Deserialize;

/// Sign-in credentials
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Payload for creating a new user account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Must equal `password`
    pub conf_password: String,
}

/// Payload for updating the caller's own name and email
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

/// Payload for creating a product; the caller becomes the owner
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub discount: f64,
}

/// Payload for updating a product's name, price and discount
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
    pub discount: f64,
}

/// Payload for creating a category
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Payload for renaming a category
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: String,
}

/// Query parameters for the by-category product filter. Category names are
/// passed comma-separated: `?categoryNames=Food,Drinks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryFilter {
    pub category_names: Option<String>,
}

impl ProductCategoryFilter {
    pub fn names(&self) -> Vec<String> {
        self.category_names
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
