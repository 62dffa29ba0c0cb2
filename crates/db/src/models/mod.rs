//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row. Insert/update inputs are the typed drafts from
//! `deliverus_core::product`.

pub mod product;
pub mod restaurant;
