//! Product catalog REST service
//!
//! A stateless HTTP layer over the `products` table: create a product,
//! fetch one by id, list with pagination, replace, and delete.

pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
