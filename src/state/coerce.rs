//! Coercion of loosely typed values coming from the UI side.

use serde_json::{Number, Value};

/// Convert a loose value to text.
///
/// `null` becomes the empty string, strings are taken as-is, booleans and
/// numbers use their display form and containers use their JSON text.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Display form of a number. Whole floats print without a fraction and
/// negative zero prints as `0`.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// Whitespace as the HUD scripts see it: Unicode white space without NEL,
/// plus the byte-order mark.
fn is_hud_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trim leading and trailing HUD whitespace.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_hud_whitespace)
}

/// Truthiness of a loose value.
///
/// `null`, `false`, zero and the empty string are false. Everything else,
/// including empty arrays and objects, is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
