//! Repository for the `products` table.

use deliverus_core::product::{ProductChanges, ProductDraft};
use deliverus_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, description, price, image, sort_order, availability, \
     fats, proteins, carbohydrates, calories, restaurant_id, product_category_id, \
     created_at, updated_at";

/// Provides CRUD and bulk operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a single product, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProductDraft) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                (name, description, price, image, sort_order, availability, \
                 fats, proteins, carbohydrates, calories, restaurant_id, product_category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image)
            .bind(input.order)
            .bind(input.availability)
            .bind(input.fats)
            .bind(input.proteins)
            .bind(input.carbohydrates)
            .bind(input.calories)
            .bind(input.restaurant_id)
            .bind(input.product_category_id)
            .fetch_one(pool)
            .await
    }

    /// Bulk-insert products in one statement. Returns the number of rows inserted.
    pub async fn create_batch(pool: &PgPool, products: &[ProductDraft]) -> Result<u64, sqlx::Error> {
        if products.is_empty() {
            return Ok(0);
        }

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        let descriptions: Vec<Option<&str>> =
            products.iter().map(|p| p.description.as_deref()).collect();
        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        let images: Vec<Option<&str>> = products.iter().map(|p| p.image.as_deref()).collect();
        let orders: Vec<Option<i32>> = products.iter().map(|p| p.order).collect();
        let availability: Vec<bool> = products.iter().map(|p| p.availability).collect();
        let fats: Vec<Option<f64>> = products.iter().map(|p| p.fats).collect();
        let proteins: Vec<Option<f64>> = products.iter().map(|p| p.proteins).collect();
        let carbohydrates: Vec<Option<f64>> = products.iter().map(|p| p.carbohydrates).collect();
        let calories: Vec<Option<f64>> = products.iter().map(|p| p.calories).collect();
        let restaurant_ids: Vec<DbId> = products.iter().map(|p| p.restaurant_id).collect();
        let category_ids: Vec<DbId> = products.iter().map(|p| p.product_category_id).collect();

        let result = sqlx::query(
            "INSERT INTO products \
                (name, description, price, image, sort_order, availability, \
                 fats, proteins, carbohydrates, calories, restaurant_id, product_category_id) \
             SELECT * FROM UNNEST( \
                $1::text[], $2::text[], $3::float8[], $4::text[], $5::int4[], $6::bool[], \
                $7::float8[], $8::float8[], $9::float8[], $10::float8[], $11::bigint[], $12::bigint[])",
        )
        .bind(&names)
        .bind(&descriptions)
        .bind(&prices)
        .bind(&images)
        .bind(&orders)
        .bind(&availability)
        .bind(&fats)
        .bind(&proteins)
        .bind(&carbohydrates)
        .bind(&calories)
        .bind(&restaurant_ids)
        .bind(&category_ids)
        .execute(pool)
        .await?;

        tracing::debug!(rows = result.rows_affected(), "Inserted product batch");
        Ok(result.rows_affected())
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a restaurant's products in display order.
    pub async fn list_by_restaurant(
        pool: &PgPool,
        restaurant_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE restaurant_id = $1 \
             ORDER BY sort_order NULLS LAST, id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await
    }

    /// Apply validated changes to a product.
    ///
    /// `name`, `price`, `order` and category are always written. Each
    /// [`Patch`](deliverus_core::product::Patch) field is bound as a presence
    /// flag plus its value, so a present `None` clears the column. `image`
    /// and `availability` keep their stored value when `None`.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductChanges,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                name = $2, \
                description = CASE WHEN $3 THEN $4 ELSE description END, \
                price = $5, \
                image = COALESCE($6, image), \
                sort_order = $7, \
                availability = COALESCE($8, availability), \
                product_category_id = $9, \
                fats = CASE WHEN $10 THEN $11 ELSE fats END, \
                proteins = CASE WHEN $12 THEN $13 ELSE proteins END, \
                carbohydrates = CASE WHEN $14 THEN $15 ELSE carbohydrates END, \
                calories = CASE WHEN $16 THEN $17 ELSE calories END, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|d| d.as_deref()))
            .bind(input.price)
            .bind(&input.image)
            .bind(input.order)
            .bind(input.availability)
            .bind(input.product_category_id)
            .bind(input.fats.is_some())
            .bind(input.fats.flatten())
            .bind(input.proteins.is_some())
            .bind(input.proteins.flatten())
            .bind(input.carbohydrates.is_some())
            .bind(input.carbohydrates.flatten())
            .bind(input.calories.is_some())
            .bind(input.calories.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Total number of products.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Empty the table and reset its id sequence.
    ///
    /// `CASCADE` also empties any table holding a foreign key to
    /// `products`; no privilege beyond table ownership is needed.
    pub async fn truncate_all(pool: &PgPool) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("TRUNCATE TABLE products RESTART IDENTITY CASCADE")
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    }
}
