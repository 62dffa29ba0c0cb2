use std::path::PathBuf;

/// Errors that abort a seeding pass.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The destination directory for product images could not be created.
    #[error("Failed to create asset directory {path}: {source}")]
    AssetDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bundled asset could not be copied.
    #[error("Failed to copy asset {file}: {source}")]
    AssetCopy {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
