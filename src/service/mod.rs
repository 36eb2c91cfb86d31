//! Service Layer
//!
//! Domain services orchestrating validation, the ownership policy and
//! persistence, plus the token primitive they share.

pub mod auth;
pub mod category;
pub mod policy;
pub mod product;
pub mod token;
pub mod user;

// Re-export services
pub use auth::AuthService;
pub use category::CategoryService;
pub use product::ProductService;
pub use token::TokenService;
pub use user::UserService;
