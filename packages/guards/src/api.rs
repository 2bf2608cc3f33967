//! Guards for the API response envelope.

use serde_json::Value;
use shared_types::{ApiFailure, ApiResponse};

use crate::fields::Fields;
use crate::primitives::is_string;

/// Check that `value` is a well-formed response envelope.
///
/// The success arm only needs a `data` key; its payload is not inspected
/// (use [`is_api_response_of`] for that). `message`, when present, is a
/// string or `null`. The error arm needs an `error`
/// object with string `code` and `message`.
pub fn is_api_response(value: &Value) -> bool {
    let Some(f) = Fields::of("ApiResponse", value) else {
        return false;
    };

    match f.get("success") {
        Some(Value::Bool(true)) => {
            f.required("data", |_| true) && f.nullable("message", is_string)
        }
        Some(Value::Bool(false)) => f.required("error", is_api_error_body),
        _ => f.required("success", Value::is_boolean),
    }
}

/// Like [`is_api_response`], additionally running `data_guard` on a success
/// payload. Error envelopes are accepted regardless of `data_guard`.
pub fn is_api_response_of(value: &Value, data_guard: impl Fn(&Value) -> bool) -> bool {
    if !is_api_response(value) {
        return false;
    }
    match value.get("success") {
        Some(Value::Bool(true)) => value.get("data").is_some_and(data_guard),
        _ => true,
    }
}

/// Check that `value` is the structured error object of an error envelope.
///
/// `details` is not inspected.
pub fn is_api_error_body(value: &Value) -> bool {
    let Some(f) = Fields::of("ApiError", value) else {
        return false;
    };

    f.required("code", is_string) && f.required("message", is_string)
}

/// Whether an already-decoded envelope is the success arm.
pub fn is_api_success<T>(response: &ApiResponse<T>) -> bool {
    response.is_success()
}

/// Whether an already-decoded envelope is the error arm.
pub fn is_api_error<T>(response: &ApiResponse<T>) -> bool {
    response.is_error()
}

/// Whether the error arm carries exactly `code`.
pub fn has_error_code(failure: &ApiFailure, code: &str) -> bool {
    failure.has_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shapes() {
        assert!(is_api_response(&json!({ "success": true, "data": {} })));
        assert!(is_api_response(&json!({ "success": true, "data": null })));
        assert!(!is_api_response(&json!({ "success": true })));
        assert!(is_api_response(&json!({ "success": true, "data": {}, "message": null })));
        assert!(is_api_response(&json!({ "success": true, "data": {}, "message": "ok" })));
        assert!(!is_api_response(&json!({ "success": true, "data": {}, "message": 3 })));
        assert!(is_api_response(&json!({
            "success": false,
            "error": { "code": "X", "message": "m" }
        })));
        assert!(!is_api_response(&json!({ "success": false, "error": { "code": "X" } })));
        assert!(!is_api_response(&json!({ "success": false, "error": "boom" })));
        assert!(!is_api_response(&json!({ "success": false })));
        assert!(!is_api_response(&json!({})));
        assert!(!is_api_response(&json!({ "success": "true", "data": 1 })));
        assert!(!is_api_response(&json!(null)));
    }

    #[test]
    fn test_typed_payload_check() {
        let ok = json!({ "success": true, "data": [1, 2] });
        assert!(is_api_response_of(&ok, Value::is_array));
        assert!(!is_api_response_of(&ok, Value::is_object));

        let err = json!({ "success": false, "error": { "code": "X", "message": "m" } });
        assert!(is_api_response_of(&err, Value::is_object));
    }
}
