//! Rule evaluator -- pure logic, no storage access.
//!
//! [`Check::RestaurantExists`] needs a store lookup and is resolved by
//! [`ProductValidator`](super::product::ProductValidator); the pure evaluator
//! passes it through.

use serde_json::Value;
use validator::{ValidateLength, ValidateRange};

use super::payload::{as_bool, as_float, as_int, is_falsy, Payload};
use super::rules::{Check, FieldRule, FieldViolation, Presence, ValidationResult, ViolationKind};
use crate::product::energy_estimate;

/// Evaluate every rule against the payload, collecting all violations.
pub fn evaluate_rules(rules: &[FieldRule], payload: &Payload) -> ValidationResult {
    let errors = rules
        .iter()
        .filter_map(|rule| evaluate_rule(rule, payload))
        .collect();
    ValidationResult::from_errors(errors)
}

/// Evaluate a single rule. Returns `None` when it passes or does not apply.
pub fn evaluate_rule(rule: &FieldRule, payload: &Payload) -> Option<FieldViolation> {
    let value = payload.get(rule.field);

    match &rule.check {
        Check::Required => evaluate_required(rule, value),
        Check::Forbidden => evaluate_forbidden(rule, value),
        Check::ImageFormat => evaluate_image_format(rule, payload),
        Check::MaxFileSize(max) => evaluate_max_file_size(rule, payload, *max),
        Check::EnergyCeiling { max_kcal } => evaluate_energy_ceiling(rule, payload, *max_kcal),
        Check::RestaurantExists => None,
        value_check => {
            let value = applicable_value(rule.presence, value)?;
            evaluate_value(rule, value_check, value)
        }
    }
}

fn applicable_value(presence: Presence, value: Option<&Value>) -> Option<&Value> {
    match presence {
        Presence::IfPresent => value.filter(|v| !v.is_null()),
        Presence::IfTruthy if is_falsy(value) => None,
        Presence::IfTruthy => value,
    }
}

fn evaluate_required(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(FieldViolation::new(rule, ViolationKind::Required, value)),
        _ => None,
    }
}

fn evaluate_forbidden(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    value.map(|v| FieldViolation::new(rule, ViolationKind::Forbidden, Some(v)))
}

fn evaluate_value(rule: &FieldRule, check: &Check, value: &Value) -> Option<FieldViolation> {
    let wrong_type = || Some(FieldViolation::new(rule, ViolationKind::WrongType, Some(value)));
    let out_of_range = || Some(FieldViolation::new(rule, ViolationKind::OutOfRange, Some(value)));

    match check {
        Check::IsString => {
            if value.is_string() {
                None
            } else {
                wrong_type()
            }
        }
        Check::Length { min, max } => {
            // Non-strings are reported by `IsString`.
            let trimmed = value.as_str()?.trim().to_string();
            if trimmed.validate_length(*min, *max, None) {
                return None;
            }
            let len = trimmed.chars().count() as u64;
            let kind = if max.is_some_and(|max| len > max) {
                ViolationKind::TooLarge
            } else {
                ViolationKind::TooShort
            };
            Some(FieldViolation::new(rule, kind, Some(value)))
        }
        Check::Float { min } => match as_float(value) {
            None => wrong_type(),
            Some(f) if f.validate_range(*min, None, None, None) => None,
            Some(_) => out_of_range(),
        },
        Check::Int { min, max } => match as_int(value) {
            None => wrong_type(),
            Some(i) if i.validate_range(*min, *max, None, None) => None,
            Some(_) => out_of_range(),
        },
        Check::Boolean => match as_bool(value) {
            Some(_) => None,
            None => wrong_type(),
        },
        _ => None,
    }
}

fn evaluate_image_format(rule: &FieldRule, payload: &Payload) -> Option<FieldViolation> {
    let file = payload.image.as_ref()?;
    if file.is_accepted_image() {
        None
    } else {
        Some(FieldViolation::new(rule, ViolationKind::InvalidImage, None))
    }
}

fn evaluate_max_file_size(rule: &FieldRule, payload: &Payload, max: u64) -> Option<FieldViolation> {
    let file = payload.image.as_ref()?;
    if file.size() <= max {
        None
    } else {
        Some(FieldViolation::new(
            rule,
            ViolationKind::TooLarge,
            Some(&Value::from(file.size())),
        ))
    }
}

/// Macros that are missing or unparseable count as zero; their own rules
/// report type errors.
fn evaluate_energy_ceiling(
    rule: &FieldRule,
    payload: &Payload,
    max_kcal: f64,
) -> Option<FieldViolation> {
    let kcal = energy_estimate(
        payload.float("fats"),
        payload.float("proteins"),
        payload.float("carbohydrates"),
    );
    if kcal > max_kcal {
        Some(FieldViolation::new(
            rule,
            ViolationKind::DerivedConstraint,
            Some(&Value::from(kcal)),
        ))
    } else {
        None
    }
}
