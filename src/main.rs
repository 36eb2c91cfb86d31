//! Catalog API Server
//!
//! Binary entry point: loads configuration, connects to Postgres, runs the
//! embedded migrations, wires repositories into services and serves the
//! catalog routes.

use std::sync::Arc;

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use catalog_api::{
    api::{create_router, AppState},
    config::AppConfig,
    database::DatabaseConfig,
    repository::{PgCategoryRepository, PgProductRepository, PgUserRepository},
    service::{AuthService, CategoryService, ProductService, TokenService, UserService},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Load configuration from environment
    let config = AppConfig::from_env()?;
    config.validate()?;

    // RUST_LOG still wins when set; LOG_LEVEL provides the default.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.server.log_level.clone()),
    )
    .init();

    log::info!("Starting Catalog API v{}", catalog_api::VERSION);

    // Database connection and migrations
    let database_pool = DatabaseConfig::from_env()?.create_pool().await?;

    log::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&database_pool).await?;
    log::info!("Database migrations completed");

    // Wire repositories into services
    let users = Arc::new(PgUserRepository::new(database_pool.clone()));
    let products = Arc::new(PgProductRepository::new(database_pool.clone()));
    let categories = Arc::new(PgCategoryRepository::new(database_pool));
    let tokens = Arc::new(TokenService::new(config.jwt.secret.clone()));

    let state = AppState {
        auth: Arc::new(AuthService::new(users.clone(), tokens.clone())),
        users: Arc::new(UserService::new(users.clone(), products.clone())),
        products: Arc::new(ProductService::new(products, users, categories.clone())),
        categories: Arc::new(CategoryService::new(categories)),
        tokens,
    };

    log::info!("Services initialized");

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any) // Permissive CORS for development
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .into_inner(),
    );

    // Start the server
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
