//! Product validation: the create/update rule sets and the async validator
//! that resolves restaurant existence against a store.

use std::sync::Arc;

use async_trait::async_trait;

use super::evaluator::evaluate_rule;
use super::payload::Payload;
use super::rules::{Check, FieldRule, FieldViolation, ValidationMode, ValidationResult, ViolationKind};
use crate::error::CoreError;
use crate::product::{
    Patch, ProductChanges, ProductDraft, MAX_IMAGE_BYTES, MAX_KCAL_PER_100G, NAME_MAX_LEN,
};
use crate::types::DbId;

pub const MSG_RESTAURANT_NOT_FOUND: &str = "The restaurantId does not exist.";
pub const MSG_RESTAURANT_FORBIDDEN: &str = "restaurantId cannot be modified";
pub const MSG_IMAGE_FORMAT: &str = "Please upload an image with format (jpeg, png).";
pub const MSG_CALORIE_CEILING: &str =
    "Product cannot contain more than 1000 calories per 100g of product";

/// `"Maximum file size of 2MB"` for the default limit.
pub fn max_file_size_message(max_bytes: u64) -> String {
    format!("Maximum file size of {}MB", max_bytes as f64 / 1_000_000.0)
}

/// Read access to restaurants, used for the existence check.
#[async_trait]
pub trait RestaurantLookup: Send + Sync {
    /// `Ok(false)` when no restaurant has this id; `Err` on storage failure.
    async fn restaurant_exists(&self, id: DbId) -> Result<bool, CoreError>;
}

#[async_trait]
impl<T: RestaurantLookup + ?Sized> RestaurantLookup for Arc<T> {
    async fn restaurant_exists(&self, id: DbId) -> Result<bool, CoreError> {
        (**self).restaurant_exists(id).await
    }
}

/// The ordered rule list for a product payload.
pub fn product_rules(mode: ValidationMode) -> Vec<FieldRule> {
    let mut rules = vec![
        FieldRule::new("name", Check::Required, "name is required"),
        FieldRule::new("name", Check::IsString, "name must be a string"),
        FieldRule::new(
            "name",
            Check::Length { min: Some(1), max: Some(NAME_MAX_LEN) },
            format!("name must be between 1 and {NAME_MAX_LEN} characters"),
        ),
        FieldRule::new("description", Check::IsString, "description must be a string").if_truthy(),
        FieldRule::new(
            "description",
            Check::Length { min: Some(1), max: None },
            "description must not be empty",
        )
        .if_truthy(),
        FieldRule::new("price", Check::Required, "price is required"),
        FieldRule::new(
            "price",
            Check::Float { min: Some(0.0) },
            "price must be a number greater than or equal to 0",
        ),
        FieldRule::new(
            "order",
            Check::Int { min: Some(i32::MIN.into()), max: Some(i32::MAX.into()) },
            "order must be a 32-bit integer",
        ),
        FieldRule::new("availability", Check::Boolean, "availability must be a boolean"),
        FieldRule::new("productCategoryId", Check::Required, "productCategoryId is required"),
        FieldRule::new(
            "productCategoryId",
            Check::Int { min: Some(1), max: None },
            "productCategoryId must be an integer greater than 0",
        ),
    ];

    match mode {
        ValidationMode::Create => rules.extend([
            FieldRule::new("restaurantId", Check::Required, "restaurantId is required"),
            FieldRule::new(
                "restaurantId",
                Check::Int { min: Some(1), max: None },
                "restaurantId must be an integer greater than 0",
            ),
            FieldRule::new("restaurantId", Check::RestaurantExists, MSG_RESTAURANT_NOT_FOUND),
        ]),
        ValidationMode::Update => rules.push(FieldRule::new(
            "restaurantId",
            Check::Forbidden,
            MSG_RESTAURANT_FORBIDDEN,
        )),
    }

    rules.extend([
        FieldRule::new("image", Check::ImageFormat, MSG_IMAGE_FORMAT),
        FieldRule::new(
            "image",
            Check::MaxFileSize(MAX_IMAGE_BYTES),
            max_file_size_message(MAX_IMAGE_BYTES),
        ),
    ]);

    for macro_field in ["fats", "proteins", "carbohydrates", "calories"] {
        rules.push(FieldRule::new(
            macro_field,
            Check::Float { min: Some(0.0) },
            format!("{macro_field} must be a number greater than or equal to 0"),
        ));
    }

    rules.push(FieldRule::new(
        "calories",
        Check::EnergyCeiling { max_kcal: MAX_KCAL_PER_100G },
        MSG_CALORIE_CEILING,
    ));

    rules
}

/// Validates product payloads, resolving restaurant existence through `L`.
#[derive(Debug, Clone)]
pub struct ProductValidator<L> {
    restaurants: L,
}

impl<L: RestaurantLookup> ProductValidator<L> {
    pub fn new(restaurants: L) -> Self {
        Self { restaurants }
    }

    /// Evaluate every product rule for `mode`, never short-circuiting.
    ///
    /// At most one restaurant lookup is made, and only for a well-formed id.
    pub async fn validate(&self, mode: ValidationMode, payload: &Payload) -> ValidationResult {
        let mut errors = Vec::new();
        for rule in product_rules(mode) {
            let violation = match rule.check {
                Check::RestaurantExists => self.check_restaurant(&rule, payload).await,
                _ => evaluate_rule(&rule, payload),
            };
            errors.extend(violation);
        }

        if !errors.is_empty() {
            tracing::debug!(?mode, error_count = errors.len(), "Product payload rejected");
        }
        ValidationResult::from_errors(errors)
    }

    async fn check_restaurant(&self, rule: &FieldRule, payload: &Payload) -> Option<FieldViolation> {
        let id = payload.int(rule.field).filter(|id| *id >= 1)?;
        let value = payload.get(rule.field);
        match self.restaurants.restaurant_exists(id).await {
            Ok(true) => None,
            Ok(false) => Some(FieldViolation::new(rule, ViolationKind::NotFound, value)),
            Err(err) => {
                tracing::error!(restaurant_id = id, error = %err, "Restaurant lookup failed");
                Some(FieldViolation {
                    message: format!("Could not verify restaurantId: {err}"),
                    ..FieldViolation::new(rule, ViolationKind::LookupFailed, value)
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sanitized output
// ---------------------------------------------------------------------------

fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is missing or malformed")))
}

/// Build the insert draft from a payload that passed create validation.
///
/// `image` is the stored path of the uploaded file, if one was saved.
pub fn draft_from_payload(payload: &Payload, image: Option<String>) -> Result<ProductDraft, CoreError> {
    Ok(ProductDraft {
        name: required(payload.trimmed("name"), "name")?,
        description: payload.trimmed("description"),
        price: required(payload.float("price"), "price")?,
        image,
        order: order_from(payload)?,
        availability: payload.boolean("availability").unwrap_or(true),
        restaurant_id: required(payload.int("restaurantId"), "restaurantId")?,
        product_category_id: required(payload.int("productCategoryId"), "productCategoryId")?,
        fats: payload.float("fats"),
        proteins: payload.float("proteins"),
        carbohydrates: payload.float("carbohydrates"),
        calories: payload.float("calories"),
    })
}

/// Build the update changes from a payload that passed update validation.
pub fn changes_from_payload(payload: &Payload, image: Option<String>) -> Result<ProductChanges, CoreError> {
    Ok(ProductChanges {
        name: required(payload.trimmed("name"), "name")?,
        description: patch(payload, "description", Payload::trimmed),
        price: required(payload.float("price"), "price")?,
        image,
        order: order_from(payload)?,
        availability: payload.boolean("availability"),
        product_category_id: required(payload.int("productCategoryId"), "productCategoryId")?,
        fats: patch(payload, "fats", Payload::float),
        proteins: patch(payload, "proteins", Payload::float),
        carbohydrates: patch(payload, "carbohydrates", Payload::float),
        calories: patch(payload, "calories", Payload::float),
    })
}

/// `None` when `field` is absent, otherwise whatever `read` makes of it.
fn patch<T>(
    payload: &Payload,
    field: &str,
    read: impl FnOnce(&Payload, &str) -> Option<T>,
) -> Patch<T> {
    payload.fields.contains_key(field).then(|| read(payload, field))
}

fn order_from(payload: &Payload) -> Result<Option<i32>, CoreError> {
    payload
        .int("order")
        .map(|order| {
            i32::try_from(order)
                .map_err(|_| CoreError::Validation(format!("order {order} is out of range")))
        })
        .transpose()
}
