//! Product validation engine.
//!
//! Declarative rule types, a pure-logic evaluator, and the product rule set
//! with its async restaurant-existence check.

pub mod evaluator;
pub mod payload;
pub mod product;
pub mod rules;
