//! Data Models Module
//!
//! Entities, request payloads, response projections and authentication
//! claim types used throughout the catalog service.

pub mod auth;
pub mod category;
pub mod product;
pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use auth::{Claims, CurrentUser};
pub use category::Category;
pub use product::{NewProduct, Product, ProductWithOwner};
pub use requests::*;
pub use responses::*;
pub use user::{NewUser, User};
