//! Wire date handling. The backend emits ISO-8601 timestamps with fractional
//! seconds but sometimes omits the trailing `Z`, so decoding normalizes the
//! string before parsing.

use crate::utils::error::{ApiError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;

/// Parse a wire date string into a UTC instant. A missing timezone suffix is
/// treated as UTC by appending `Z` before parsing. Fractional seconds are
/// required; the backend always sends them.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let normalized: Cow<'_, str> = if raw.ends_with('Z') {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("{raw}Z"))
    };

    // RFC 3339 only allows '.' as the fractional-seconds separator, so its
    // absence means a whole-second timestamp.
    if !normalized.contains('.') {
        return Err(ApiError::Decode {
            detail: format!("cannot decode date string {raw}"),
        });
    }

    DateTime::parse_from_rfc3339(&normalized)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ApiError::Decode {
            detail: format!("cannot decode date string {raw}"),
        })
}

/// Format an instant the way the backend expects it: fractional seconds,
/// always `Z`-suffixed.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// serde adapter so entity fields can opt into the wire format with
/// `#[serde(with = "crate::core::dates::iso8601")]`.
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_instant(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw).map_err(serde::de::Error::custom)
    }
}
