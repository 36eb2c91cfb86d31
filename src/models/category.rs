//! Category Model

use sqlx::FromRow;

/// A category row as stored. Unlike products, categories carry no owner.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    /// Unique case-insensitively across all categories
    pub name: String,
}
