//! Lenient text extraction from decoded JSON responses

use serde_json::Value;

/// Render a scalar JSON value as plain text.
///
/// Strings come back verbatim and other scalars in their JSON spelling, so
/// `null` reads as `"null"`. Arrays and objects carry no text of their own and
/// render as an empty string.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Text at a JSON pointer, or an empty string when the path does not resolve
pub fn text_at(body: &Value, pointer: &str) -> String {
    body.pointer(pointer).map(value_as_text).unwrap_or_default()
}
