use std::sync::Arc;

use deliverus_core::validation::product::ProductValidator;
use deliverus_db::lookup::PgRestaurantLookup;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: deliverus_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Product payload gate, backed by the same pool.
    pub validator: Arc<ProductValidator<PgRestaurantLookup>>,
}

impl AppState {
    pub fn new(pool: deliverus_db::DbPool, config: ServerConfig) -> Self {
        let validator = ProductValidator::new(PgRestaurantLookup::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            validator: Arc::new(validator),
        }
    }
}
