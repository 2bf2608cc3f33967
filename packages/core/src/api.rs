//! The response envelope every API endpoint returns.
//!
//! On the wire the envelope is discriminated by a boolean:
//!
//! ```json
//! { "success": true,  "data": { ... }, "message": "optional" }
//! { "success": false, "error": { "code": "NOT_FOUND", "message": "...", "details": ... } }
//! ```
//!
//! Optional fields are omitted entirely when absent, never written as `null`.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

literal_enum! {
    /// Conventional error codes. The wire field stays an open string.
    pub enum ApiErrorCode {
        ValidationError => "VALIDATION_ERROR",
        NotFound => "NOT_FOUND",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        Conflict => "CONFLICT",
        RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
        InternalError => "INTERNAL_ERROR",
        ServiceUnavailable => "SERVICE_UNAVAILABLE",
    }
}

/// Structured error carried by the error arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// The success arm.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSuccess<T> {
    pub data: T,
    pub message: Option<String>,
}

/// The error arm.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub error: ApiError,
}

impl ApiFailure {
    /// Check the error code by exact string comparison.
    pub fn has_code(&self, code: &str) -> bool {
        self.error.code == code
    }
}

/// A response envelope: exactly one of success or error.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(ApiSuccess<T>),
    Error(ApiFailure),
}

impl<T> ApiResponse<T> {
    /// Value of the `success` discriminator.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    pub fn as_success(&self) -> Option<&ApiSuccess<T>> {
        match self {
            ApiResponse::Success(success) => Some(success),
            ApiResponse::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&ApiFailure> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Error(failure) => Some(failure),
        }
    }

    /// Convert into a `Result`, keeping the payload or the error object.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Success(success) => Ok(success.data),
            ApiResponse::Error(failure) => Err(failure.error),
        }
    }
}

/// Build a success envelope. `message` is omitted from the wire form when `None`.
pub fn create_success_response<T>(data: T, message: Option<String>) -> ApiResponse<T> {
    ApiResponse::Success(ApiSuccess { data, message })
}

/// Build an error envelope. `details` is omitted from the wire form when `None`.
pub fn create_error_response<T>(
    code: impl Into<String>,
    message: impl Into<String>,
    details: Option<Value>,
) -> ApiResponse<T> {
    ApiResponse::Error(ApiFailure {
        error: ApiError {
            code: code.into(),
            message: message.into(),
            details,
        },
    })
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiResponse::Success(success) => {
                let len = if success.message.is_some() { 3 } else { 2 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", &success.data)?;
                if let Some(message) = &success.message {
                    map.serialize_entry("message", message)?;
                }
                map.end()
            }
            ApiResponse::Error(failure) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", &failure.error)?;
                map.end()
            }
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = serde_json::Map::deserialize(deserializer)?;
        match map.get("success") {
            Some(Value::Bool(true)) => {
                let data = map.remove("data").ok_or_else(|| D::Error::missing_field("data"))?;
                let data = T::deserialize(data).map_err(D::Error::custom)?;
                let message = match map.remove("message") {
                    Some(message) => {
                        Option::<String>::deserialize(message).map_err(D::Error::custom)?
                    }
                    None => None,
                };
                Ok(ApiResponse::Success(ApiSuccess { data, message }))
            }
            Some(Value::Bool(false)) => {
                let error = map
                    .remove("error")
                    .ok_or_else(|| D::Error::missing_field("error"))?;
                let error = ApiError::deserialize(error).map_err(D::Error::custom)?;
                Ok(ApiResponse::Error(ApiFailure { error }))
            }
            Some(_) => Err(D::Error::custom("`success` must be a boolean")),
            None => Err(D::Error::missing_field("success")),
        }
    }
}
