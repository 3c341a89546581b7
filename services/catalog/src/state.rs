//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::ProductRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub product_repository: ProductRepository,
}
