//! Postgres Repositories
//!
//! SQLx-backed implementations of the repository traits. Uniqueness
//! violations that slip past the validation pre-checks (the accepted
//! check-then-write race) are caught by constraint name and remapped to the
//! Conflict kind instead of surfacing as generic database errors.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::models::category::Category;
use crate::models::product::{NewProduct, Product, ProductWithOwner};
use crate::models::user::{NewUser, User};
use crate::repository::{CategoryRepository, ProductRepository, UserRepository};
use crate::utils::error::{messages, ApiError, ApiResult};

/// Remaps a unique-constraint violation on `constraint` to `mapped`,
/// passing every other error through as a database error.
fn map_constraint(err: sqlx::Error, constraint: &str, mapped: ApiError) -> ApiError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.constraint() == Some(constraint) => mapped,
        _ => ApiError::Database(err),
    }
}

/// Flat row for product + owner joins.
#[derive(FromRow)]
struct ProductOwnerRow {
    id: i64,
    name: String,
    price: f64,
    discount: f64,
    user_id: i64,
    owner_name: String,
    owner_email: String,
    owner_password_hash: String,
}

impl From<ProductOwnerRow> for ProductWithOwner {
    fn from(row: ProductOwnerRow) -> Self {
        ProductWithOwner {
            product: Product {
                id: row.id,
                name: row.name,
                price: row.price,
                discount: row.discount,
                user_id: row.user_id,
            },
            owner: User {
                id: row.user_id,
                name: row.owner_name,
                email: row.owner_email,
                password_hash: row.owner_password_hash,
            },
        }
    }
}

const PRODUCT_OWNER_COLUMNS: &str = "p.id, p.name, p.price, p.discount, p.user_id, \
     u.name AS owner_name, u.email AS owner_email, u.password_hash AS owner_password_hash";

/// User repository backed by Postgres.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn all(&self) -> ApiResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn by_id(&self, id: i64) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn by_email(&self, email: &str) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn email_in_use(&self, email: &str, exclude_id: i64) -> ApiResult<bool> {
        let in_use = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE lower(email) = lower($1) AND id <> $2)",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(in_use)
    }

    async fn insert(&self, user: NewUser) -> ApiResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, name, email, password_hash",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint(
                e,
                "users_email_lower_idx",
                ApiError::Conflict(messages::EMAIL_ALREADY_IN_USE.into()),
            )
        })?;

        Ok(user)
    }

    async fn update(&self, user: &User) -> ApiResult<()> {
        sqlx::query("UPDATE users SET name = $2, email = $3 WHERE id = $1")
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_constraint(
                    e,
                    "users_email_lower_idx",
                    ApiError::Conflict(messages::EMAIL_ALREADY_IN_USE.into()),
                )
            })?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        // Owned products cascade at the store level.
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Product repository backed by Postgres.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn all_with_owners(&self) -> ApiResult<Vec<ProductWithOwner>> {
        let rows = sqlx::query_as::<_, ProductOwnerRow>(&format!(
            "SELECT {PRODUCT_OWNER_COLUMNS} FROM products p \
             JOIN users u ON u.id = p.user_id ORDER BY p.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductWithOwner::from).collect())
    }

    async fn by_id(&self, id: i64) -> ApiResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, discount, user_id FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn by_id_with_owner(&self, id: i64) -> ApiResult<Option<ProductWithOwner>> {
        let row = sqlx::query_as::<_, ProductOwnerRow>(&format!(
            "SELECT {PRODUCT_OWNER_COLUMNS} FROM products p \
             JOIN users u ON u.id = p.user_id WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductWithOwner::from))
    }

    async fn by_owner(&self, user_id: i64) -> ApiResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, discount, user_id FROM products \
             WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn by_category_names(&self, names: &[String]) -> ApiResult<Vec<ProductWithOwner>> {
        let mut lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();

        let rows = sqlx::query_as::<_, ProductOwnerRow>(&format!(
            "SELECT {PRODUCT_OWNER_COLUMNS} FROM products p \
             JOIN users u ON u.id = p.user_id \
             WHERE p.id IN ( \
                 SELECT pc.product_id FROM product_categories pc \
                 JOIN categories c ON c.id = pc.category_id \
                 WHERE lower(c.name) = ANY($1) \
                 GROUP BY pc.product_id \
                 HAVING COUNT(DISTINCT c.id) = $2) \
             ORDER BY p.id"
        ))
        .bind(&lowered)
        .bind(lowered.len() as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductWithOwner::from).collect())
    }

    async fn categories_of(&self, product_id: i64) -> ApiResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT c.id, c.name FROM categories c \
             JOIN product_categories pc ON pc.category_id = c.id \
             WHERE pc.product_id = $1 ORDER BY c.id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn insert(&self, product: NewProduct) -> ApiResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, discount, user_id) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, price, discount, user_id",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.discount)
        .bind(product.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint(
                e,
                "products_name_key",
                ApiError::Conflict(messages::PRODUCT_NAME_TAKEN.into()),
            )
        })?;

        Ok(product)
    }

    async fn update(&self, product: &Product) -> ApiResult<()> {
        // The owning user id is immutable; only the payload fields change.
        sqlx::query("UPDATE products SET name = $2, price = $3, discount = $4 WHERE id = $1")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.discount)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_constraint(
                    e,
                    "products_name_key",
                    ApiError::Conflict(messages::PRODUCT_NAME_TAKEN.into()),
                )
            })?;

        Ok(())
    }

    async fn attach_categories(&self, product_id: i64, category_ids: &[i64]) -> ApiResult<()> {
        // One transaction so the attach is a single logical write.
        let mut tx = self.pool.begin().await?;

        for category_id in category_ids {
            sqlx::query(
                "INSERT INTO product_categories (product_id, category_id) \
                 VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Category repository backed by Postgres.
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn all(&self) -> ApiResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn by_id(&self, id: i64) -> ApiResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    async fn by_name(&self, name: &str) -> ApiResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories WHERE lower(name) = lower($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn name_in_use(&self, name: &str, exclude_id: i64) -> ApiResult<bool> {
        let in_use = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE lower(name) = lower($1) AND id <> $2)",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(in_use)
    }

    async fn insert(&self, name: &str) -> ApiResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint(
                e,
                "categories_name_lower_idx",
                ApiError::Conflict(messages::CATEGORY_ALREADY_EXISTS.into()),
            )
        })?;

        Ok(category)
    }

    async fn update(&self, category: &Category) -> ApiResult<()> {
        sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_constraint(
                    e,
                    "categories_name_lower_idx",
                    ApiError::Conflict(messages::CATEGORY_ALREADY_EXISTS.into()),
                )
            })?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
