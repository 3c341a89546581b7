//! Schema bootstrap for the catalog database
//!
//! The table is created at startup when missing, so a fresh database is
//! usable without a separate migration step.

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

/// Create the `products` table if it does not exist yet
pub async fn run_migrations(pool: &PgPool) -> DatabaseResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            product_name VARCHAR(255) NOT NULL,
            category VARCHAR(100) NOT NULL,
            sku VARCHAR(100) NOT NULL UNIQUE,
            stock INTEGER NOT NULL DEFAULT 0,
            price NUMERIC(12, 2) NOT NULL,
            status VARCHAR(50) NOT NULL DEFAULT 'active',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(DatabaseError::Migration)?;

    info!("Database schema ready");

    Ok(())
}
