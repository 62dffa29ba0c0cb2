//! Copies the bundled example images into the products folder.

use std::path::PathBuf;

use deliverus_core::seed_catalog::EXAMPLE_ASSET_FILES;

use crate::error::SeedError;

/// Copies a fixed list of files from one directory into another.
pub struct AssetStager {
    source_dir: PathBuf,
    destination_dir: PathBuf,
    files: &'static [&'static str],
}

impl AssetStager {
    /// A stager for the bundled example images.
    pub fn new(source_dir: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            files: EXAMPLE_ASSET_FILES,
        }
    }

    /// Create the destination directory (with parents) and copy every file,
    /// overwriting existing copies. Stops at the first failure.
    ///
    /// Returns the number of files copied.
    pub async fn stage(&self) -> Result<usize, SeedError> {
        tokio::fs::create_dir_all(&self.destination_dir)
            .await
            .map_err(|source| SeedError::AssetDirectory {
                path: self.destination_dir.clone(),
                source,
            })?;

        for file in self.files {
            tokio::fs::copy(self.source_dir.join(file), self.destination_dir.join(file))
                .await
                .map_err(|source| SeedError::AssetCopy {
                    file: (*file).to_string(),
                    source,
                })?;
        }

        tracing::info!(
            count = self.files.len(),
            destination = %self.destination_dir.display(),
            "Staged example assets"
        );
        Ok(self.files.len())
    }
}
