//! Product entity model.

use deliverus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    /// Display position; stored as `sort_order`.
    #[sqlx(rename = "sort_order")]
    pub order: Option<i32>,
    pub availability: bool,
    pub fats: Option<f64>,
    pub proteins: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub calories: Option<f64>,
    pub restaurant_id: DbId,
    pub product_category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
