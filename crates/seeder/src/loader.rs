//! Catalog loading and rollback.

use deliverus_core::seed_catalog::{self, GENERATED_BATCHES};
use deliverus_db::repositories::ProductRepo;
use sqlx::PgPool;

use crate::assets::AssetStager;
use crate::config::SeedConfig;
use crate::error::SeedError;

/// Rows written by a successful [`ProductSeeder::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub assets: usize,
    pub fixed: u64,
    pub generated: u64,
}

impl SeedReport {
    pub fn total_products(&self) -> u64 {
        self.fixed + self.generated
    }
}

/// Loads the demo catalog into `products`.
pub struct ProductSeeder {
    pool: PgPool,
    config: SeedConfig,
}

impl ProductSeeder {
    pub fn new(pool: PgPool, config: SeedConfig) -> Self {
        Self { pool, config }
    }

    pub fn asset_stager(&self) -> AssetStager {
        AssetStager::new(&self.config.example_assets_dir, &self.config.products_folder)
    }

    /// Stage the example images, then insert the fixed catalog followed by
    /// each generated batch in order.
    ///
    /// The image staging failure aborts before any row is written. Batches
    /// are separate statements, so a failing batch leaves earlier ones in
    /// place; run [`revert`](Self::revert) before retrying.
    pub async fn apply(&self) -> Result<SeedReport, SeedError> {
        let assets = self.asset_stager().stage().await?;

        let prefix = self.config.image_prefix();
        let fixed = ProductRepo::create_batch(&self.pool, &seed_catalog::fixed_catalog(&prefix)).await?;
        tracing::info!(rows = fixed, "Inserted fixed catalog");

        let mut generated = 0;
        for batch in GENERATED_BATCHES {
            let products = seed_catalog::generate_products(batch.count, batch.restaurant_id, &prefix);
            let rows = ProductRepo::create_batch(&self.pool, &products).await?;
            tracing::info!(
                restaurant_id = batch.restaurant_id,
                rows,
                "Inserted generated products"
            );
            generated += rows;
        }

        Ok(SeedReport {
            assets,
            fixed,
            generated,
        })
    }

    /// Remove every product.
    ///
    /// Failures are logged and swallowed; the caller always sees success.
    pub async fn revert(&self) {
        match ProductRepo::truncate_all(&self.pool).await {
            Ok(()) => tracing::info!("Truncated products"),
            Err(e) => tracing::error!(error = %e, "Failed to truncate products"),
        }
    }
}
