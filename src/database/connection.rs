//! Postgres Connections
//!
//! Pool construction for the catalog store. `DATABASE_URL` is required; the
//! pool knobs fall back to defaults suitable for a single-node deployment.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::env;

/// Database connection pool type alias for convenience
pub type DatabasePool = PgPool;

/// Connection settings read from the environment.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            url: std::env::var("DATABASE_URL")?,
            max_connections: env::get_u32("DB_MAX_CONNECTIONS", 10),
            connect_timeout: Duration::from_secs(env::get_u64("DB_CONNECT_TIMEOUT", 30)),
        })
    }

    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .connect(&self.url)
            .await
    }
}
