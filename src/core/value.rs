//! Null-safe projection of loosely typed property values.
//!
//! Nothing in this module fails: values that cannot be read as numbers are
//! missing data, not errors.

use crate::core::types::{Entry, PropertyId, PropertyValue};

/// Reads `property` off `entry` and coerces it to a finite number.
#[must_use]
pub fn extract_number(entry: &Entry, property: &PropertyId) -> Option<f64> {
    entry.value(property).as_ref().and_then(number_from_value)
}

/// Reads `property` off `entry` as label text.
#[must_use]
pub fn extract_text(entry: &Entry, property: &PropertyId) -> Option<String> {
    entry.value(property).as_ref().and_then(text_from_value)
}

#[must_use]
pub fn number_from_value(value: &PropertyValue) -> Option<f64> {
    match value {
        PropertyValue::Null => None,
        PropertyValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        PropertyValue::Number(number) => number.is_finite().then_some(*number),
        PropertyValue::Text(text) => parse_number(text),
        PropertyValue::List(items) => match items.as_slice() {
            [single] => number_from_value(single),
            _ => None,
        },
    }
}

#[must_use]
pub fn text_from_value(value: &PropertyValue) -> Option<String> {
    match value {
        PropertyValue::Null => None,
        PropertyValue::Bool(flag) => Some(flag.to_string()),
        PropertyValue::Number(number) => Some(format_number(*number)),
        PropertyValue::Text(text) => Some(text.clone()),
        PropertyValue::List(items) => Some(
            items
                .iter()
                .filter_map(text_from_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

/// Parses a whole string as a finite decimal number, ignoring surrounding
/// whitespace. `inf`/`nan` spellings are rejected.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || numeric_prefix_len(trimmed) != trimmed.len() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses the longest numeric literal at the start of `raw` (after leading
/// whitespace), so `"12px"` yields `12`.
#[must_use]
pub fn parse_number_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let len = numeric_prefix_len(trimmed);
    if len == 0 {
        return None;
    }
    trimmed[..len]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Formats a number the way it is shown as a label: integers without a
/// fractional part, everything else with the shortest round-trip form.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Drops the sign of negative zero.
        return "0".to_owned();
    }
    value.to_string()
}

fn numeric_prefix_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if digits > 0 || end > frac_start {
            digits += end - frac_start;
            idx = end;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut end = idx + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > exp_start {
            idx = end;
        }
    }

    idx
}
