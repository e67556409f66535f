//! Helpers over the `serde_json::Value` form of a record's fields.

use std::cmp::Ordering;

use serde_json::Value;

use super::FieldFormat;

/// Text a free-text search is matched against. Strings and numbers are
/// searchable; arrays contribute each searchable element.
pub fn searchable_text(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Number(n) => vec![n.to_string()],
        Value::Array(items) => items.iter().flat_map(searchable_text).collect(),
        _ => Vec::new(),
    }
}

/// Exact-equality test used by id filters. An array matches when any of
/// its elements does.
pub fn matches_key(value: &Value, key: &str) -> bool {
    match value {
        Value::String(s) => s == key,
        Value::Number(n) => n.to_string() == key,
        Value::Bool(b) => b.to_string() == key,
        Value::Array(items) => items.iter().any(|item| matches_key(item, key)),
        _ => false,
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over field values: null < bool < number < string.
/// Strings compare case-insensitively first, then exactly.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        (Value::Array(x), Value::Array(y)) => {
            for (left, right) in x.iter().zip(y.iter()) {
                let ordering = compare_values(left, right);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Render a value for a user-facing message. References are rendered by
/// the caller, which has to look the referenced record up; here they fall
/// back to the raw key.
pub fn display_value(format: FieldFormat, value: &Value) -> String {
    match (format, value) {
        (_, Value::Null) => String::new(),
        (FieldFormat::Currency, Value::Number(n)) => format_currency(n.as_f64().unwrap_or(0.0)),
        (FieldFormat::Phone, Value::String(s)) => format_phone(s),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    }
}

fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..])
    } else {
        raw.to_string()
    }
}
