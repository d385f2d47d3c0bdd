//! Timestamp conversion between the domain model, the REST wire format and
//! the form format.
//!
//! Timestamps travel as ISO-8601 strings in UTC with at least millisecond
//! precision, e.g. `2022-10-25T04:47:00.000Z`. Finer fractions are kept as
//! micro or nanoseconds. Forms show them as `2022-10-25T04:47`.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format of date-time form controls.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Renders a timestamp for the REST API.
pub fn to_wire(timestamp: &DateTime<Utc>) -> String {
    let format = if timestamp.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    timestamp.to_rfc3339_opts(format, true)
}

/// Parses a timestamp received from the REST API. Any offset is normalised to UTC.
pub fn from_wire(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid ISO-8601 timestamp: {}", value))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Renders a timestamp for a date-time form control.
pub fn to_form_value(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(DATE_TIME_FORMAT).to_string()
}

/// Parses the value of a date-time form control.
///
/// Seconds are accepted when present, full ISO-8601 values as well.
pub fn from_form_value(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    from_wire(value)
}

/// Serde adapter for optional timestamp fields.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Candle {
///     #[serde(default, with = "shared::wire::iso_timestamp")]
///     time: Option<DateTime<Utc>>,
/// }
/// ```
pub mod iso_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_str(&super::to_wire(timestamp)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.is_empty() => super::from_wire(&raw)
                .map(Some)
                .map_err(|e| D::Error::custom(format!("{:#}", e))),
            _ => Ok(None),
        }
    }

    /// Variant for timestamps that are always present.
    pub mod required {
        use chrono::{DateTime, Utc};
        use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&crate::wire::to_wire(value))
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = String::deserialize(deserializer)?;
            crate::wire::from_wire(&raw).map_err(|e| D::Error::custom(format!("{:#}", e)))
        }
    }
}
