//! Domain logic for the DeliverUS product catalog.
//!
//! Everything here is free of database and HTTP dependencies: validation
//! rules and their evaluator, upload inspection, nutrition math, and the
//! seed catalog data.

pub mod error;
pub mod product;
pub mod seed_catalog;
pub mod types;
pub mod upload;
pub mod validation;
