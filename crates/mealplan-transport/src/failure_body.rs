// ABOUTME: Best-effort message extraction from non-2xx meal plan responses
// ABOUTME: Tries a JSON {error, details} body, then plain text, then the status alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;

/// Message used when the body offers nothing better
#[must_use]
pub fn default_failure_message(status: u16) -> String {
    format!("Failed to generate meal plan ({status})")
}

/// Build the user-facing message for a failed response
///
/// A JSON body is read as `{error, details?}`: a non-empty `error` replaces the
/// default message and a non-empty `details` is appended after a colon. A JSON
/// body of any other shape keeps the default. A body that is not JSON is used
/// as-is when it has visible text.
#[must_use]
pub fn failure_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => message_from_json(status, &json),
        Err(_) => {
            let text = body.trim();
            if text.is_empty() {
                default_failure_message(status)
            } else {
                text.to_owned()
            }
        }
    }
}

fn message_from_json(status: u16, json: &Value) -> String {
    let non_empty = |key: &str| {
        json.get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    };

    let mut message = non_empty("error").map_or_else(|| default_failure_message(status), str::to_owned);
    if let Some(details) = non_empty("details") {
        message.push_str(": ");
        message.push_str(details);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_and_details_are_joined() {
        let body = r#"{"error":"No foods match","details":"try fewer restrictions"}"#;
        assert_eq!(failure_message(422, body), "No foods match: try fewer restrictions");
    }

    #[test]
    fn test_details_without_error_keep_default_prefix() {
        let body = r#"{"details":"upstream timeout"}"#;
        assert_eq!(
            failure_message(502, body),
            "Failed to generate meal plan (502): upstream timeout"
        );
    }

    #[test]
    fn test_non_object_json_uses_default() {
        assert_eq!(failure_message(500, "42"), "Failed to generate meal plan (500)");
    }

    #[test]
    fn test_plain_text_body_is_used_verbatim() {
        assert_eq!(failure_message(503, "  Service Unavailable\n"), "Service Unavailable");
    }

    #[test]
    fn test_empty_body_uses_default() {
        assert_eq!(failure_message(404, ""), "Failed to generate meal plan (404)");
    }
}
