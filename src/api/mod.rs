//! API Layer
//!
//! HTTP API endpoints and request handling for the catalog service.

pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use handlers::AppState;
pub use routes::create_router;
