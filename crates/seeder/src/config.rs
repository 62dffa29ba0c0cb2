use std::path::PathBuf;

/// Default destination for product images, relative to the working directory.
pub const DEFAULT_PRODUCTS_FOLDER: &str = "public/products";

/// Default location of the bundled example images.
pub const DEFAULT_EXAMPLE_ASSETS_DIR: &str = "public/example_assets";

/// Seeder configuration.
///
/// Built once by the binary and handed to [`ProductSeeder`](crate::ProductSeeder);
/// the seeding code itself never reads the environment.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Needed by `apply` and `revert`; asset staging runs without it.
    pub database_url: Option<String>,
    /// Where product images are served from; also the prefix of stored image paths.
    pub products_folder: PathBuf,
    /// Bundled example images copied into `products_folder`.
    pub example_assets_dir: PathBuf,
}

impl SeedConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `DATABASE_URL`       | none                    |
    /// | `PRODUCTS_FOLDER`    | `public/products`       |
    /// | `EXAMPLE_ASSETS_DIR` | `public/example_assets` |
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").ok();

        let products_folder = std::env::var("PRODUCTS_FOLDER")
            .unwrap_or_else(|_| DEFAULT_PRODUCTS_FOLDER.into())
            .into();

        let example_assets_dir = std::env::var("EXAMPLE_ASSETS_DIR")
            .unwrap_or_else(|_| DEFAULT_EXAMPLE_ASSETS_DIR.into())
            .into();

        Self {
            database_url,
            products_folder,
            example_assets_dir,
        }
    }

    /// `products_folder` as the prefix used in stored image paths.
    pub fn image_prefix(&self) -> String {
        self.products_folder.to_string_lossy().into_owned()
    }
}
