//! Route Definitions
//!
//! The full catalog surface on one router. Authentication is enforced per
//! handler through the `CurrentUser` extractor, so public and bearer-gated
//! routes live side by side.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::api::handlers::{self, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/api/auth/signIn", post(handlers::sign_in))
        .route("/api/auth/authentication", patch(handlers::authenticate))
        // Categories
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        // Products
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/products/filters/by-category",
            get(handlers::products_by_category),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route(
            "/api/products/{id}/categories",
            post(handlers::attach_product_categories),
        )
        // Users
        .route(
            "/api/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .put(handlers::update_user),
        )
        .route("/api/users/products", get(handlers::user_products))
        .route(
            "/api/users/{id}",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .with_state(state)
}
