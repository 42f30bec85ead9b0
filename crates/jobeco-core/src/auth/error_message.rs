//! Human-readable messages from backend error bodies.

use serde::Deserialize;
use serde_json::Value;

/// Error body shape: `{"detail": ...}` or `{"message": ...}`, where the
/// value is a string or a list of validation errors.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

/// Extracts a message from a failed response body.
///
/// `detail` wins over `message`. A string is used as-is; an array of
/// validation errors is reduced to each entry's `msg` (or `message`) and
/// joined with `". "`. When nothing usable is found the message falls back
/// to one naming the HTTP status.
pub fn extract_error_message(status: u16, body: &[u8]) -> String {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

    [parsed.detail, parsed.message]
        .into_iter()
        .flatten()
        .find_map(|value| message_from_value(&value))
        .unwrap_or_else(|| fallback_message(status))
}

pub fn fallback_message(status: u16) -> String {
    format!("Request failed ({}). Is the backend running?", status)
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(map) => map
                        .get("msg")
                        .or_else(|| map.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    Value::String(s) => Some(s.clone()),
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(". "))
            }
        }
        _ => None,
    }
}
