//! Candidate payloads and loose value coercion.
//!
//! Form submissions deliver every field as a string, JSON bodies deliver
//! native numbers and booleans. The coercion helpers accept both.

use serde_json::{Map, Value};

use crate::upload::UploadedFile;

/// The field values and optional image submitted for a create or update.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    pub fields: Map<String, Value>,
    pub image: Option<UploadedFile>,
}

impl Payload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            image: None,
        }
    }

    pub fn with_image(mut self, image: UploadedFile) -> Self {
        self.image = Some(image);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Present and not null.
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_null())
    }

    pub fn float(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(as_float)
    }

    pub fn int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(as_int)
    }

    pub fn boolean(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(as_bool)
    }

    /// Trimmed string value, `None` when absent, not a string, or blank.
    pub fn trimmed(&self, field: &str) -> Option<String> {
        let s = self.get(field)?.as_str()?.trim();
        (!s.is_empty()).then(|| s.to_string())
    }
}

/// Absent, null, `""`, `false` or `0`.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// A finite float from a JSON number or a decimal string.
pub fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// An integer from an integral JSON number or an integer string.
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim();
            let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}

/// A boolean from `true`/`false`, `"true"`/`"false"`/`"1"`/`"0"` or `1`/`0`.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Plain decimal notation only (`12`, `-3.5`, `.5`, `1e3`); rejects
/// `inf`, `NaN` and hex.
fn parse_decimal(s: &str) -> Option<f64> {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let looks_numeric = !body.is_empty()
        && body.bytes().any(|b| b.is_ascii_digit())
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !looks_numeric {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn float_accepts_numbers_and_numeric_strings() {
        assert_eq!(as_float(&json!(2.5)), Some(2.5));
        assert_eq!(as_float(&json!(3)), Some(3.0));
        assert_eq!(as_float(&json!("1.25")), Some(1.25));
        assert_eq!(as_float(&json!(" 4 ")), Some(4.0));
    }

    #[test]
    fn float_rejects_non_numeric() {
        assert_eq!(as_float(&json!("abc")), None);
        assert_eq!(as_float(&json!("inf")), None);
        assert_eq!(as_float(&json!("NaN")), None);
        assert_eq!(as_float(&json!("")), None);
        assert_eq!(as_float(&json!(true)), None);
        assert_eq!(as_float(&json!(null)), None);
    }

    #[test]
    fn int_accepts_integral_values() {
        assert_eq!(as_int(&json!(7)), Some(7));
        assert_eq!(as_int(&json!(7.0)), Some(7));
        assert_eq!(as_int(&json!("-12")), Some(-12));
        assert_eq!(as_int(&json!("+3")), Some(3));
    }

    #[test]
    fn int_rejects_fractions_and_text() {
        assert_eq!(as_int(&json!(1.5)), None);
        assert_eq!(as_int(&json!("1.5")), None);
        assert_eq!(as_int(&json!("one")), None);
        assert_eq!(as_int(&json!("-")), None);
    }

    #[test]
    fn bool_accepts_loose_forms() {
        assert_eq!(as_bool(&json!(true)), Some(true));
        assert_eq!(as_bool(&json!("false")), Some(false));
        assert_eq!(as_bool(&json!("1")), Some(true));
        assert_eq!(as_bool(&json!(0)), Some(false));
        assert_eq!(as_bool(&json!("yes")), None);
        assert_eq!(as_bool(&json!(2)), None);
    }

    #[test]
    fn falsy_values() {
        assert!(is_falsy(None));
        assert!(is_falsy(Some(&json!(null))));
        assert!(is_falsy(Some(&json!(""))));
        assert!(is_falsy(Some(&json!(0))));
        assert!(is_falsy(Some(&json!(false))));
        assert!(!is_falsy(Some(&json!("x"))));
        assert!(!is_falsy(Some(&json!(1))));
    }

    #[test]
    fn trimmed_drops_blank_strings() {
        let mut fields = Map::new();
        fields.insert("name".into(), json!("  Olives  "));
        fields.insert("blank".into(), json!("   "));
        let payload = Payload::new(fields);
        assert_eq!(payload.trimmed("name").as_deref(), Some("Olives"));
        assert_eq!(payload.trimmed("blank"), None);
        assert_eq!(payload.trimmed("missing"), None);
    }
}
