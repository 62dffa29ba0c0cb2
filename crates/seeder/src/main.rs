use anyhow::Context;
use clap::{Parser, Subcommand};
use deliverus_seeder::assets::AssetStager;
use deliverus_seeder::{ProductSeeder, SeedConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "deliverus-seeder", about = "Provision the demo product catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Copy example images and insert the demo catalog.
    Apply,
    /// Delete every product.
    Revert,
    /// Copy example images only.
    StageAssets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "deliverus_seeder=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = SeedConfig::from_env();

    match cli.command {
        Command::StageAssets => {
            let copied = AssetStager::new(&config.example_assets_dir, &config.products_folder)
                .stage()
                .await?;
            tracing::info!(copied, "Assets staged");
        }
        Command::Apply => {
            let report = connect(config).await?.apply().await?;
            tracing::info!(
                assets = report.assets,
                products = report.total_products(),
                "Seed applied"
            );
        }
        Command::Revert => connect(config).await?.revert().await,
    }

    Ok(())
}

async fn connect(config: SeedConfig) -> anyhow::Result<ProductSeeder> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;
    let pool = deliverus_db::create_pool(database_url).await?;
    deliverus_db::health_check(&pool).await?;
    deliverus_db::run_migrations(&pool).await?;
    tracing::info!("Database ready");
    Ok(ProductSeeder::new(pool, config))
}
