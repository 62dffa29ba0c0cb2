//! `deliverus-seeder` library crate.
//!
//! One-shot provisioning of the product catalog: demo image staging, the
//! fixed catalog, and generated filler batches. The binary entrypoint lives
//! in `main.rs`.

pub mod assets;
pub mod config;
pub mod error;
pub mod loader;

pub use config::SeedConfig;
pub use error::SeedError;
pub use loader::{ProductSeeder, SeedReport};
