//! Field validators for raw JSON input.
//!
//! Every validator takes the raw value (absent when the key is missing) and
//! the field name, and returns either the typed value or a
//! [`DomainError::Validation`] naming the field. Callers chain them with `?`,
//! so the first failing field is the one reported.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::time::{parse_instant, DayRange};

/// A non-empty string, returned trimmed.
pub fn require_string(value: Option<&Value>, field: &str) -> DomainResult<String> {
    match value {
        Some(Value::String(text)) => require_param(Some(text), field),
        _ => Err(missing(field)),
    }
}

/// A non-empty query parameter, returned trimmed.
pub fn require_param(value: Option<&str>, field: &str) -> DomainResult<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(missing(field)),
    }
}

/// An array of strings, returned as given. Empty arrays are accepted.
pub fn require_string_array(value: Option<&Value>, field: &str) -> DomainResult<Vec<String>> {
    let not_strings = || DomainError::validation(field, format!("{field} must be an array of strings"));

    let Some(Value::Array(items)) = value else {
        return Err(not_strings());
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(text) => Ok(text.clone()),
            _ => Err(not_strings()),
        })
        .collect()
}

/// A JSON object (arrays are rejected). The contents are not inspected.
pub fn require_object(value: Option<&Value>, field: &str) -> DomainResult<Map<String, Value>> {
    match value {
        Some(Value::Object(map)) => Ok(map.clone()),
        _ => Err(DomainError::validation(field, format!("{field} must be an object"))),
    }
}

/// Like [`require_object`], but a missing or `null` value yields an empty object.
pub fn optional_object(value: Option<&Value>, field: &str) -> DomainResult<Map<String, Value>> {
    match value {
        None | Some(Value::Null) => Ok(Map::new()),
        other => require_object(other, field),
    }
}

/// A JSON number. Numeric strings are not coerced.
pub fn require_number(value: Option<&Value>, field: &str) -> DomainResult<f64> {
    value
        .and_then(Value::as_f64)
        .ok_or_else(|| DomainError::validation(field, format!("{field} must be a number")))
}

/// A number strictly greater than zero.
pub fn require_positive(value: Option<&Value>, field: &str) -> DomainResult<f64> {
    let number = require_number(value, field)?;
    if number > 0.0 {
        Ok(number)
    } else {
        Err(DomainError::validation(field, format!("{field} must be greater than 0")))
    }
}

/// A number greater than or equal to zero.
pub fn require_non_negative(value: Option<&Value>, field: &str) -> DomainResult<f64> {
    let number = require_number(value, field)?;
    if number >= 0.0 {
        Ok(number)
    } else {
        Err(DomainError::validation(
            field,
            format!("{field} must be greater than or equal to 0"),
        ))
    }
}

/// A string holding an ISO-8601 date-time.
pub fn require_instant(value: Option<&Value>, field: &str) -> DomainResult<DateTime<Utc>> {
    let text = require_string(value, field)?;
    parse_instant(&text).ok_or_else(|| {
        DomainError::validation(field, format!("{field} must be a valid ISO-8601 date-time"))
    })
}

/// A `YYYY-MM-DD` query parameter, expanded to its UTC day range.
pub fn require_day(value: Option<&str>, field: &str) -> DomainResult<DayRange> {
    let day = require_param(value, field)?;
    DayRange::parse(&day, field)
}

/// The string value if present, otherwise `default`. Non-strings count as absent.
pub fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        _ => default.to_string(),
    }
}

/// A string value if present and non-empty after trimming.
pub fn optional_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}

fn missing(field: &str) -> DomainError {
    DomainError::validation(field, format!("{field} is required"))
}
