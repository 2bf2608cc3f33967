//! Scalar and structural refinements shared by the entity guards.

use std::sync::LazyLock;

use chrono::{DateTime, Timelike, Utc};
use regex::Regex;
use serde_json::Value;
use shared_types::{DateLike, to_iso_string};

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("valid URL pattern"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// A JSON object (not null, not an array).
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// An array whose elements are all strings. `[]` qualifies.
pub fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

/// An array with at least one element. Element types are not checked.
pub fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// A timestamp in either wire shape: an RFC 3339 string, or a store timestamp
/// object with integer `seconds`/`nanoseconds` that converts to a valid date.
pub fn is_date_like(value: &Value) -> bool {
    DateLike::from_value(value).is_some()
}

/// A string with at least one non-whitespace character.
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// A string starting with `http://` or `https://` followed by anything.
pub fn is_valid_url(value: &Value) -> bool {
    value.as_str().is_some_and(|s| URL_PATTERN.is_match(s))
}

/// A string shaped like `local@domain.tld`.
pub fn is_valid_email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| EMAIL_PATTERN.is_match(s))
}

/// A string already in canonical `YYYY-MM-DDTHH:MM:SS.sssZ` form.
///
/// The string must parse and re-render to exactly itself, so `2024-01-01`,
/// `2024-01-01T00:00:00Z` and `2024-01-01T00:00:00.0000Z` are all rejected.
/// Leap seconds (`:60`) are rejected too.
pub fn is_iso_date_string(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    match DateTime::parse_from_rfc3339(s) {
        // chrono stores a leap second as nanosecond >= 1e9
        Ok(parsed) if parsed.nanosecond() >= 1_000_000_000 => false,
        Ok(parsed) => to_iso_string(&parsed.with_timezone(&Utc)) == s,
        Err(_) => false,
    }
}

pub(crate) fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub(crate) fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub(crate) fn is_bool(value: &Value) -> bool {
    value.is_boolean()
}

/// A non-negative integer that fits in `u32`.
pub(crate) fn is_count(value: &Value) -> bool {
    value.as_u64().is_some_and(|n| u32::try_from(n).is_ok())
}

/// An integer that fits in `i64`.
pub(crate) fn is_integer(value: &Value) -> bool {
    value.is_i64()
}

/// Array whose elements all satisfy `check`. `[]` qualifies.
pub(crate) fn is_array_of(value: &Value, check: impl Fn(&Value) -> bool) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_object() {
        assert!(is_object(&json!({})));
        assert!(!is_object(&json!(null)));
        assert!(!is_object(&json!([])));
        assert!(!is_object(&json!("x")));
    }

    #[test]
    fn test_arrays() {
        assert!(is_string_array(&json!([])));
        assert!(is_string_array(&json!(["a", "b"])));
        assert!(!is_string_array(&json!(["a", 1])));
        assert!(!is_string_array(&json!("a")));

        assert!(!is_non_empty_array(&json!([])));
        assert!(is_non_empty_array(&json!([1, "mixed", null])));
        assert!(!is_non_empty_array(&json!({ "0": 1 })));
    }

    #[test]
    fn test_non_empty_string() {
        assert!(is_non_empty_string(&json!("x")));
        assert!(!is_non_empty_string(&json!("   ")));
        assert!(!is_non_empty_string(&json!("")));
        assert!(!is_non_empty_string(&json!(3)));
    }

    #[test]
    fn test_url() {
        assert!(is_valid_url(&json!("https://example.com")));
        assert!(is_valid_url(&json!("http://x")));
        assert!(!is_valid_url(&json!("ftp://example.com")));
        assert!(!is_valid_url(&json!("not a url")));
        assert!(!is_valid_url(&json!("https://")));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email(&json!("jane@example.com")));
        assert!(!is_valid_email(&json!("jane@example")));
        assert!(!is_valid_email(&json!("jane doe@example.com")));
        assert!(!is_valid_email(&json!("@example.com")));
    }

    #[test]
    fn test_iso_date_string_requires_canonical_form() {
        assert!(is_iso_date_string(&json!("2024-01-01T00:00:00.000Z")));
        assert!(is_iso_date_string(&json!("1999-12-31T23:59:59.999Z")));
        assert!(!is_iso_date_string(&json!("2024-01-01")));
        assert!(!is_iso_date_string(&json!("2024-01-01T00:00:00Z")));
        assert!(!is_iso_date_string(&json!("2024-01-01T00:00:00.000+00:00")));
        assert!(!is_iso_date_string(&json!("2024-02-30T00:00:00.000Z")));
        assert!(!is_iso_date_string(&json!(1_704_067_200)));
    }

    #[test]
    fn test_iso_date_string_rejects_leap_second() {
        assert!(!is_iso_date_string(&json!("2016-12-31T23:59:60.000Z")));
        assert!(is_iso_date_string(&json!("2016-12-31T23:59:59.999Z")));
    }

    #[test]
    fn test_date_like() {
        assert!(is_date_like(&json!("2024-01-01T00:00:00Z")));
        assert!(is_date_like(&json!({ "seconds": 1_704_067_200, "nanoseconds": 5 })));
        assert!(!is_date_like(&json!({ "seconds": "1", "nanoseconds": 0 })));
        assert!(!is_date_like(&json!(null)));
    }

    #[test]
    fn test_count() {
        assert!(is_count(&json!(0)));
        assert!(is_count(&json!(3)));
        assert!(!is_count(&json!(-1)));
        assert!(!is_count(&json!(1.5)));
        assert!(!is_count(&json!(u64::from(u32::MAX) + 1)));
    }
}
