//! HTTP Request Handlers
//!
//! Axum handlers for the catalog endpoints. Handlers stay thin: decode the
//! request, call the matching service operation, encode the response with
//! the status the route contract promises.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::models::auth::CurrentUser;
use crate::models::requests::*;
use crate::models::responses::*;
use crate::service::{AuthService, CategoryService, ProductService, TokenService, UserService};
use crate::utils::error::ApiResult;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub products: Arc<ProductService>,
    pub categories: Arc<CategoryService>,
    pub tokens: Arc<TokenService>,
}

// Auth

pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<Json<SignInResponse>> {
    let response = state.auth.sign_in(request).await?;
    Ok(Json(response))
}

pub async fn authenticate(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state.auth.authenticate(&caller).await?;
    Ok(Json(user))
}

// Categories

pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let categories = state.categories.list().await?;
    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CategoryResponse>> {
    let category = state.categories.get(id).await?;
    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryResponse>)> {
    let category = state.categories.create(request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category = state.categories.update(id, request).await?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Products

pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductWithUserResponse>>> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProductWithUserAndCategoriesResponse>> {
    let product = state.products.get(id).await?;
    Ok(Json(product))
}

pub async fn products_by_category(
    State(state): State<AppState>,
    Query(filter): Query<ProductCategoryFilter>,
) -> ApiResult<Json<Vec<ProductWithUserResponse>>> {
    let products = state.products.by_categories(&filter.names()).await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    caller: CurrentUser,
    Json(request): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductWithUserResponse>)> {
    let product = state.products.create(&caller, request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn attach_product_categories(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i64>,
    Json(category_names): Json<Vec<String>>,
) -> ApiResult<StatusCode> {
    state
        .products
        .attach_categories(&caller, id, &category_names)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn update_product(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product = state.products.update(&caller, id, request).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.products.delete(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Users

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserWithProductsResponse>> {
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

pub async fn user_products(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state.users.products_of(&caller).await?;
    Ok(Json(products))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserWithProductsResponse>)> {
    let user = state.users.create(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    caller: CurrentUser,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.update(&caller, request).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
