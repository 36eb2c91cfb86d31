//! Product Service
//!
//! Product CRUD and category attachment. Creation resolves the owner from
//! the caller's verified identity; update, delete and attachment run the
//! ownership check before anything else touches the payload, so a non-owner
//! always sees Unauthorized regardless of what they sent.

use std::sync::Arc;

use crate::models::auth::CurrentUser;
use crate::models::product::NewProduct;
use crate::models::requests::{CreateProductRequest, UpdateProductRequest};
use crate::models::responses::{
    ProductResponse, ProductWithUserAndCategoriesResponse, ProductWithUserResponse,
};
use crate::repository::{CategoryRepository, ProductRepository, UserRepository};
use crate::service::policy::ensure_owner;
use crate::utils::error::{messages, ApiError, ApiResult};
use crate::utils::validation::validate_product;

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    users: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            users,
            categories,
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<ProductWithUserResponse>> {
        let products = self.products.all_with_owners().await?;
        Ok(products.iter().map(ProductWithUserResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> ApiResult<ProductWithUserAndCategoriesResponse> {
        let entry = self
            .products
            .by_id_with_owner(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::PRODUCT_NOT_FOUND.into()))?;

        let categories = self.products.categories_of(entry.product.id).await?;
        Ok(ProductWithUserAndCategoriesResponse::new(&entry, &categories))
    }

    /// Products carrying every one of the given category names. An empty
    /// filter is vacuously satisfied by every product, so it returns the
    /// full list.
    pub async fn by_categories(&self, names: &[String]) -> ApiResult<Vec<ProductWithUserResponse>> {
        let products = if names.is_empty() {
            self.products.all_with_owners().await?
        } else {
            self.products.by_category_names(names).await?
        };
        Ok(products.iter().map(ProductWithUserResponse::from).collect())
    }

    pub async fn create(
        &self,
        caller: &CurrentUser,
        request: CreateProductRequest,
    ) -> ApiResult<ProductWithUserResponse> {
        // Owner resolution comes before payload validation.
        let owner = self
            .users
            .by_id(caller.id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::USER_NOT_FOUND.into()))?;

        validate_product(&request.name, request.price, request.discount)?;

        let product = self
            .products
            .insert(NewProduct {
                name: request.name,
                price: request.price,
                discount: request.discount,
                user_id: owner.id,
            })
            .await?;

        Ok(ProductWithUserResponse::from(
            &crate::models::product::ProductWithOwner { product, owner },
        ))
    }

    pub async fn update(
        &self,
        caller: &CurrentUser,
        id: i64,
        request: UpdateProductRequest,
    ) -> ApiResult<ProductResponse> {
        let mut product = self
            .products
            .by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::PRODUCT_NOT_FOUND.into()))?;

        // Ownership before validation: a non-owner never learns whether the
        // payload was valid.
        ensure_owner(product.user_id, caller)?;
        validate_product(&request.name, request.price, request.discount)?;

        product.name = request.name;
        product.price = request.price;
        product.discount = request.discount;
        self.products.update(&product).await?;

        Ok(ProductResponse::from(&product))
    }

    pub async fn delete(&self, caller: &CurrentUser, id: i64) -> ApiResult<()> {
        let product = self
            .products
            .by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::PRODUCT_NOT_FOUND.into()))?;

        ensure_owner(product.user_id, caller)?;
        self.products.delete(product.id).await
    }

    /// Attaches the named categories to a product. Every name must resolve;
    /// a single unknown name fails the whole operation before anything is
    /// written, and already-attached categories are skipped (idempotent
    /// union).
    pub async fn attach_categories(
        &self,
        caller: &CurrentUser,
        product_id: i64,
        category_names: &[String],
    ) -> ApiResult<()> {
        let product = self
            .products
            .by_id(product_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::PRODUCT_NOT_FOUND.into()))?;

        ensure_owner(product.user_id, caller)?;

        let attached = self.products.categories_of(product.id).await?;
        let mut new_ids = Vec::new();
        for name in category_names {
            let category = self
                .categories
                .by_name(name)
                .await?
                .ok_or_else(|| {
                    ApiError::BadRequest(format!("category with name {name} not found"))
                })?;

            let already_attached = attached.iter().any(|c| c.id == category.id);
            if !already_attached && !new_ids.contains(&category.id) {
                new_ids.push(category.id);
            }
        }

        self.products.attach_categories(product.id, &new_ids).await
    }
}
