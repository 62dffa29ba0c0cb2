//! Validation rule and result types.

use serde::{Deserialize, Serialize};

/// Whether a payload is being validated for creation or for update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Create,
    Update,
}

/// When a value check is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Skip when the field is absent or null.
    IfPresent,
    /// Skip when the field is absent, null, `""`, `false` or `0`.
    IfTruthy,
}

/// The predicate a rule applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Field must be present and non-null.
    Required,
    /// Field must not appear at all.
    Forbidden,
    /// Value must be a JSON string.
    IsString,
    /// Trimmed string length in characters.
    Length { min: Option<u64>, max: Option<u64> },
    /// Value must coerce to a finite float, optionally bounded below.
    Float { min: Option<f64> },
    /// Value must coerce to an integer, optionally bounded on either side.
    Int { min: Option<i64>, max: Option<i64> },
    /// Value must coerce to a boolean.
    Boolean,
    /// Uploaded file must be one of the accepted image formats.
    ImageFormat,
    /// Uploaded file must not exceed this many bytes.
    MaxFileSize(u64),
    /// Restaurant with this id must exist. Needs a store lookup.
    RestaurantExists,
    /// fats x 9 + proteins x 4 + carbohydrates x 4 must not exceed this.
    EnergyCeiling { max_kcal: f64 },
}

/// A single declarative rule: one predicate on one field with its message.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
    pub presence: Presence,
    pub message: String,
}

impl FieldRule {
    pub fn new(field: &'static str, check: Check, message: impl Into<String>) -> Self {
        Self {
            field,
            check,
            presence: Presence::IfPresent,
            message: message.into(),
        }
    }

    /// Skip this rule for falsy values as well as missing ones.
    pub fn if_truthy(mut self) -> Self {
        self.presence = Presence::IfTruthy;
        self
    }
}

/// Category of a rule violation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    Forbidden,
    WrongType,
    TooShort,
    TooLarge,
    OutOfRange,
    InvalidImage,
    NotFound,
    DerivedConstraint,
    /// The restaurant store could not be queried.
    LookupFailed,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FieldViolation {
    pub fn new(rule: &FieldRule, kind: ViolationKind, value: Option<&serde_json::Value>) -> Self {
        Self {
            field: rule.field.to_string(),
            kind,
            message: rule.message.clone(),
            value: value.cloned(),
        }
    }
}

/// Aggregated result of evaluating all rules against one payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Violations reported against `field`, in rule order.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_error(&self, field: &str, kind: ViolationKind) -> bool {
        self.errors_for(field).any(|e| e.kind == kind)
    }
}
