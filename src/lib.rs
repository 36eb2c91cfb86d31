//! Catalog API Library
//!
//! A catalog management service providing CRUD operations over users,
//! products and categories, with JWT bearer authentication and ownership
//! checks on product and self-profile mutations.
//!
//! # Architecture
//!
//! The library is organized into several layers:
//!
//! - **API Layer**: HTTP handlers, routing and the bearer auth extractor
//! - **Service Layer**: Business logic, validation and the ownership policy
//! - **Repository Layer**: Persistence behind object-safe traits
//! - **Models**: Entities, request payloads and response projections
//! - **Database**: Connection management and pooling
//! - **Utils**: Shared utilities for security, validation, and error handling
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use catalog_api::{
//!     api::{create_router, AppState},
//!     database::DatabaseConfig,
//!     repository::{PgCategoryRepository, PgProductRepository, PgUserRepository},
//!     service::{AuthService, CategoryService, ProductService, TokenService, UserService},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = DatabaseConfig::from_env()?.create_pool().await?;
//!
//!     let users = Arc::new(PgUserRepository::new(pool.clone()));
//!     let products = Arc::new(PgProductRepository::new(pool.clone()));
//!     let categories = Arc::new(PgCategoryRepository::new(pool));
//!     let tokens = Arc::new(TokenService::new("signing_secret".to_string()));
//!
//!     let state = AppState {
//!         auth: Arc::new(AuthService::new(users.clone(), tokens.clone())),
//!         users: Arc::new(UserService::new(users.clone(), products.clone())),
//!         products: Arc::new(ProductService::new(products, users, categories.clone())),
//!         categories: Arc::new(CategoryService::new(categories)),
//!         tokens,
//!     };
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```

/// HTTP API layer with handlers, routing and authentication
pub mod api;

/// Configuration management for all service settings
pub mod config;

/// Database connection management and configuration
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Persistence layer behind repository traits
pub mod repository;

/// Business logic services
pub mod service;

/// Shared utilities for security, validation, and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_router, AppState};
pub use models::{
    auth::{Claims, CurrentUser},
    category::Category,
    product::{Product, ProductWithOwner},
    requests::{
        CreateCategoryRequest, CreateProductRequest, CreateUserRequest, SignInRequest,
        UpdateCategoryRequest, UpdateProductRequest, UpdateUserRequest,
    },
    user::User,
};
pub use repository::{
    CategoryRepository, PgCategoryRepository, PgProductRepository, PgUserRepository,
    ProductRepository, UserRepository,
};
pub use service::{AuthService, CategoryService, ProductService, TokenService, UserService};
pub use utils::error::{ApiError, ApiResult, ErrorResponse};

// Re-export database utilities for configuration
pub use database::{DatabaseConfig, DatabasePool};

// Re-export configuration system
pub use config::{env, AppConfig, JwtConfig, ServerConfig};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
