//! Postgres-backed restaurant lookup for the product validator.

use async_trait::async_trait;
use deliverus_core::error::CoreError;
use deliverus_core::types::DbId;
use deliverus_core::validation::product::RestaurantLookup;

use crate::repositories::RestaurantRepo;
use crate::DbPool;

/// Resolves restaurant existence with one primary-key read per call.
#[derive(Debug, Clone)]
pub struct PgRestaurantLookup {
    pool: DbPool,
}

impl PgRestaurantLookup {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantLookup for PgRestaurantLookup {
    async fn restaurant_exists(&self, id: DbId) -> Result<bool, CoreError> {
        RestaurantRepo::exists(&self.pool, id)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))
    }
}
