//! Repository for restaurants and product categories.
//!
//! The product slice only reads restaurants (existence checks) and creates
//! them for fixtures; full restaurant management is elsewhere.

use deliverus_core::types::DbId;
use sqlx::PgPool;

use crate::models::restaurant::{ProductCategory, Restaurant};

/// Column list for `restaurants` and `product_categories` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides lookups for restaurants and product categories.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Whether a restaurant with this primary key exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM restaurants WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Find a restaurant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a restaurant, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Restaurant, sqlx::Error> {
        let query = format!("INSERT INTO restaurants (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Insert a product category, returning the created row.
    pub async fn create_category(pool: &PgPool, name: &str) -> Result<ProductCategory, sqlx::Error> {
        let query =
            format!("INSERT INTO product_categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductCategory>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
