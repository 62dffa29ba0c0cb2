//! Product domain constants, nutrition math, and typed drafts.
//!
//! A [`ProductDraft`] is the sanitized, typed shape of a product that passed
//! the create validator (or was built by the seed catalog). [`ProductChanges`]
//! is the update counterpart; it never carries a restaurant id.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a product name, in characters.
pub const NAME_MAX_LEN: u64 = 255;

/// Maximum accepted size of an uploaded product image (around 2 MB).
pub const MAX_IMAGE_BYTES: u64 = 2_000_000;

/// Energy ceiling for a 100 g portion, in kcal.
pub const MAX_KCAL_PER_100G: f64 = 1000.0;

/// kcal per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// kcal per gram of protein.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// kcal per gram of carbohydrate.
pub const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;

// ---------------------------------------------------------------------------
// Nutrition
// ---------------------------------------------------------------------------

/// Estimated kcal per 100 g from macro-nutrient grams.
///
/// Missing macros count as zero grams.
pub fn energy_estimate(fats: Option<f64>, proteins: Option<f64>, carbohydrates: Option<f64>) -> f64 {
    fats.unwrap_or(0.0) * KCAL_PER_GRAM_FAT
        + proteins.unwrap_or(0.0) * KCAL_PER_GRAM_PROTEIN
        + carbohydrates.unwrap_or(0.0) * KCAL_PER_GRAM_CARBOHYDRATE
}

/// Whether the macro-nutrients stay within [`MAX_KCAL_PER_100G`].
pub fn within_energy_ceiling(
    fats: Option<f64>,
    proteins: Option<f64>,
    carbohydrates: Option<f64>,
) -> bool {
    energy_estimate(fats, proteins, carbohydrates) <= MAX_KCAL_PER_100G
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// A product ready to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Stored path of the product image, if any.
    pub image: Option<String>,
    pub order: Option<i32>,
    pub availability: bool,
    #[validate(range(min = 1))]
    pub restaurant_id: DbId,
    #[validate(range(min = 1))]
    pub product_category_id: DbId,
    #[validate(range(min = 0.0))]
    pub fats: Option<f64>,
    #[validate(range(min = 0.0))]
    pub proteins: Option<f64>,
    #[validate(range(min = 0.0))]
    pub carbohydrates: Option<f64>,
    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,
}

impl ProductDraft {
    /// Energy estimate for this draft's macro-nutrients.
    pub fn energy_estimate(&self) -> f64 {
        energy_estimate(self.fats, self.proteins, self.carbohydrates)
    }
}

/// An update to a nullable column: `None` keeps the stored value,
/// `Some(None)` clears it, `Some(Some(v))` writes `v`.
pub type Patch<T> = Option<Option<T>>;

/// Field changes for an existing product.
///
/// `order` is always written (a missing order resets it to null).
/// `description` and the nutrition fields are [`Patch`]es: absent keeps the
/// stored value, an empty or null value clears it. `image` and
/// `availability` are only written when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    pub name: String,
    pub description: Patch<String>,
    pub price: f64,
    pub image: Option<String>,
    pub order: Option<i32>,
    pub availability: Option<bool>,
    pub product_category_id: DbId,
    pub fats: Patch<f64>,
    pub proteins: Patch<f64>,
    pub carbohydrates: Patch<f64>,
    pub calories: Patch<f64>,
}
