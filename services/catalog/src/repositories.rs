//! Product repository for database operations

use anyhow::Result;
use sqlx::PgPool;

use crate::models::{CreateProductRequest, Product, ProductQuery, UpdateProductRequest};

/// Product repository for database operations
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product
    ///
    /// `id`, `status`, and both timestamps come from the database.
    pub async fn create(&self, payload: &CreateProductRequest) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (product_name, category, sku, stock, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_name, category, sku, stock, price, status, created_at, updated_at
            "#,
        )
        .bind(&payload.product_name)
        .bind(&payload.category)
        .bind(&payload.sku)
        .bind(payload.stock)
        .bind(payload.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Find a product by its id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, category, sku, stock, price, status, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Find a product by its SKU
    pub async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, category, sku, stock, price, status, created_at, updated_at
            FROM products
            WHERE sku = $1
            "#,
        )
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Get one page of products plus the total row count
    pub async fn list(&self, query: &ProductQuery) -> Result<(Vec<Product>, i64)> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, category, sku, stock, price, status, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.limit() as i64)
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok((products, total))
    }

    /// Replace the mutable fields of a product, refreshing `updated_at`
    ///
    /// Returns `None` when no row has the given id.
    pub async fn update(&self, id: i32, payload: &UpdateProductRequest) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET product_name = $1, category = $2, sku = $3, stock = $4, price = $5,
                updated_at = now()
            WHERE id = $6
            RETURNING id, product_name, category, sku, stock, price, status, created_at, updated_at
            "#,
        )
        .bind(&payload.product_name)
        .bind(&payload.category)
        .bind(&payload.sku)
        .bind(payload.stock)
        .bind(payload.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Delete a product by its id
    ///
    /// Returns true when a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
