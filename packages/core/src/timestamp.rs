//! Date-like values and their normalization to `DateTime<Utc>`.
//!
//! Document-store reads hand back timestamps in one of two shapes depending on
//! where in the pipeline the document was loaded:
//!
//! - an already converted date, which crosses a JSON boundary as an RFC 3339
//!   string
//! - a raw store timestamp object `{ "seconds": .., "nanoseconds": .. }`
//!   (the admin SDK's `_seconds`/`_nanoseconds` spelling is accepted too)
//!
//! Both are collapsed into [`DateTime<Utc>`] the moment a value is decoded, so
//! typed code never has to ask which representation it got.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors converting a raw timestamp object into a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp out of range: {seconds}s {nanoseconds}ns")]
    OutOfRange { seconds: i64, nanoseconds: u32 },
}

/// A document-store timestamp that has not been converted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimestamp {
    /// Whole seconds since the Unix epoch.
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    /// Sub-second part, `0..1_000_000_000`.
    #[serde(alias = "_nanoseconds")]
    pub nanoseconds: u32,
}

impl RawTimestamp {
    pub fn new(seconds: i64, nanoseconds: u32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Convert to a UTC date.
    pub fn to_date(&self) -> Result<DateTime<Utc>, TimestampError> {
        if self.nanoseconds >= 1_000_000_000 {
            return Err(self.out_of_range());
        }
        DateTime::from_timestamp(self.seconds, self.nanoseconds).ok_or_else(|| self.out_of_range())
    }

    fn out_of_range(&self) -> TimestampError {
        TimestampError::OutOfRange {
            seconds: self.seconds,
            nanoseconds: self.nanoseconds,
        }
    }
}

impl From<DateTime<Utc>> for RawTimestamp {
    fn from(date: DateTime<Utc>) -> Self {
        Self {
            seconds: date.timestamp(),
            nanoseconds: date.timestamp_subsec_nanos(),
        }
    }
}

/// Either representation of a timestamp, as it arrives on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateLike {
    /// An already converted date.
    Date(DateTime<Utc>),
    /// A raw store timestamp.
    Timestamp(RawTimestamp),
}

impl DateLike {
    /// Normalize to a UTC date.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, TimestampError> {
        match self {
            DateLike::Date(date) => Ok(*date),
            DateLike::Timestamp(raw) => raw.to_date(),
        }
    }

    /// Read a date-like value out of untyped JSON.
    ///
    /// Returns `None` when the value has neither shape or when a timestamp
    /// object does not convert to a valid date.
    pub fn from_value(value: &serde_json::Value) -> Option<DateTime<Utc>> {
        DateLike::deserialize(value).ok()?.to_utc().ok()
    }
}

/// Render a date the way `Date.prototype.toISOString` does:
/// `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn to_iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for required date-like fields.
///
/// Use with `#[serde(with = "crate::date_like")]` on a `DateTime<Utc>`.
pub mod date_like {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::DateLike;

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        date.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateLike::deserialize(deserializer)?
            .to_utc()
            .map_err(serde::de::Error::custom)
    }

    /// Same as the parent module, for nullable fields.
    ///
    /// Pair with `#[serde(default)]` so an absent key decodes to `None`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        use super::DateLike;

        pub fn serialize<S: Serializer>(
            date: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            date.serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<DateLike>::deserialize(deserializer)?
                .map(|d| d.to_utc())
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}
