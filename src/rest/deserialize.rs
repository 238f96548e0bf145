//! Field decoders for resource payloads.
//!
//! The service sends numbers either as JSON numbers or as strings, and
//! timestamps either as RFC 2822 (`Tue, 05 Mar 2024 18:21:07 +0000`) or as
//! ISO 8601 (`2024-03-05T18:21:07Z`). These helpers normalize both shapes.
//!
//! Every helper decodes absent or `null` values to `None`, so fields must be
//! declared with `#[serde(default, deserialize_with = "...")]`. Malformed input
//! is a decode error rather than `None`.
//!
//! # Example
//!
//! ```rust
//! use serde::Deserialize;
//! use rust_decimal::Decimal;
//! use twilio_api::rest::deserialize;
//!
//! #[derive(Deserialize)]
//! struct Record {
//!     #[serde(default, deserialize_with = "deserialize::option_decimal")]
//!     price: Option<Decimal>,
//!     #[serde(default, deserialize_with = "deserialize::option_integer")]
//!     num_segments: Option<i64>,
//! }
//!
//! let record: Record = serde_json::from_str(r#"{"price": "-0.00750", "num_segments": "2"}"#).unwrap();
//! assert_eq!(record.price, Some(Decimal::new(-750, 5)));
//! assert_eq!(record.num_segments, Some(2));
//!
//! let record: Record = serde_json::from_str("{}").unwrap();
//! assert_eq!(record.price, None);
//! ```

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Number(serde_json::Number),
    String(String),
}

/// Decodes an optional timestamp from RFC 2822 or ISO 8601 text.
///
/// An empty string is treated as unset.
///
/// # Errors
///
/// Fails if the text is neither RFC 2822 nor ISO 8601.
pub fn option_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_datetime(text)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {text}"))),
    }
}

/// Decodes an optional integer sent as a number or a numeric string.
///
/// # Errors
///
/// Fails on non-integral numbers and non-numeric strings.
pub fn option_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(number)) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid integer: {number}"))),
        Some(StringOrNumber::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid integer: {text}")))
        }
    }
}

/// Decodes an optional decimal sent as a number or a numeric string.
///
/// The value keeps the scale the service sent (`"-0.00750"` has scale 5).
///
/// # Errors
///
/// Fails on non-numeric strings.
pub fn option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(StringOrNumber::Number(number)) => number.to_string(),
        Some(StringOrNumber::String(text)) => text.trim().to_string(),
    };
    if text.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|_| D::Error::custom(format!("invalid decimal: {text}")))
}

fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc2822(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
