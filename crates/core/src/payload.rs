//! Untyped payload access for the validation layer.
//!
//! Incoming request bodies arrive as raw JSON (string keys to arbitrary
//! values). These helpers extract typed fields while accumulating
//! field-level messages, so a validator reports every failing field in one
//! pass. Unknown fields are ignored by construction: validators only ever
//! look up the fields they recognize.

use serde_json::{Map, Value};

use crate::error::FieldErrors;

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_A_NUMBER: &str = "Not a valid number.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer.";
pub const NOT_A_LIST: &str = "Not a valid list.";
pub const NOT_A_DATE: &str = "Not a valid date.";
pub const EMPTY_FIELD: &str = "Field may not be empty.";

/// Record a message against a field.
pub fn push_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}

/// View the payload as a JSON object. A non-object payload has no fields,
/// so callers fall through to "missing field" errors for everything they
/// require.
pub fn as_object(payload: &Value) -> Option<&Map<String, Value>> {
    payload.as_object()
}

/// Required string field. Absent/null and wrong-type are both recorded.
pub fn required_str<'a>(
    fields: &'a Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<&'a str> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            push_error(errors, field, MISSING_FIELD);
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            push_error(errors, field, NOT_A_STRING);
            None
        }
    }
}

/// Required float field. Accepts a JSON number or a numeric string.
pub fn required_f64(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            push_error(errors, field, MISSING_FIELD);
            None
        }
        Some(Value::Number(n)) => n.as_f64().or_else(|| {
            push_error(errors, field, NOT_A_NUMBER);
            None
        }),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                push_error(errors, field, NOT_A_NUMBER);
                None
            }
        },
        Some(_) => {
            push_error(errors, field, NOT_A_NUMBER);
            None
        }
    }
}

/// Required integer field. Accepts a JSON integer or an integer string.
pub fn required_i64(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<i64> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            push_error(errors, field, MISSING_FIELD);
            None
        }
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            push_error(errors, field, NOT_AN_INTEGER);
            None
        }),
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                push_error(errors, field, NOT_AN_INTEGER);
                None
            }
        },
        Some(_) => {
            push_error(errors, field, NOT_AN_INTEGER);
            None
        }
    }
}

/// Optional string field: `None` when absent, an error when present with
/// the wrong type.
pub fn optional_str<'a>(
    fields: &'a Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<&'a str> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            push_error(errors, field, NOT_A_STRING);
            None
        }
    }
}

/// Required list field.
pub fn required_array<'a>(
    fields: &'a Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<&'a Vec<Value>> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            push_error(errors, field, MISSING_FIELD);
            None
        }
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            push_error(errors, field, NOT_A_LIST);
            None
        }
    }
}
