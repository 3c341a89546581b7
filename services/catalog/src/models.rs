//! Request and response models for the catalog service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A row of the `products` table
///
/// The SKU is stored in the `sku` column but travels as `"SKU"` in JSON.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub category: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub stock: i32,
    pub price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for product creation
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product_name: String,
    pub category: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub stock: i32,
    pub price: Decimal,
}

/// Request for a full product update
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub product_name: String,
    pub category: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub stock: i32,
    pub price: Decimal,
}

/// Query parameters for product listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Number of items per page
    pub limit: Option<u32>,
}

impl ProductQuery {
    /// Effective page, at least the first one
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, clamped to 1..=100
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// Row offset corresponding to the effective page and limit
    pub fn offset(&self) -> i64 {
        (self.page() - 1) as i64 * self.limit() as i64
    }
}

/// Response envelope for product creation
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub success: bool,
    pub message: String,
    pub data: Product,
}

/// Response for a single product lookup
#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: Product,
    pub success: bool,
}

/// Response for product listing with pagination
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}
