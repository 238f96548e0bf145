//! Form and query parameter marshaling.
//!
//! Parameter structs derive [`Serialize`] with the service's wire names
//! (`#[serde(rename = "DateSent<")]`) and `skip_serializing_if =
//! "Option::is_none"` on every optional field. [`to_params`] flattens such a
//! struct into ordered `(key, value)` pairs:
//!
//! - `None` / `null` fields are omitted entirely
//! - sequences become repeated keys (`MediaUrl=a&MediaUrl=b`)
//! - booleans become `true` / `false`
//! - nested objects are sent as their JSON text
//!
//! # Example
//!
//! ```rust
//! use serde::Serialize;
//! use twilio_api::rest::to_params;
//!
//! #[derive(Serialize)]
//! struct Params {
//!     #[serde(rename = "To")]
//!     to: String,
//!     #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
//!     from: Option<String>,
//!     #[serde(rename = "MediaUrl")]
//!     media_url: Vec<String>,
//! }
//!
//! let params = Params {
//!     to: "+15558675309".to_string(),
//!     from: None,
//!     media_url: vec!["https://a".to_string(), "https://b".to_string()],
//! };
//!
//! let pairs = to_params(&params).unwrap();
//! assert_eq!(pairs, vec![
//!     ("To".to_string(), "+15558675309".to_string()),
//!     ("MediaUrl".to_string(), "https://a".to_string()),
//!     ("MediaUrl".to_string(), "https://b".to_string()),
//! ]);
//! ```

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Serializes a parameter struct into ordered wire pairs.
///
/// Field order follows the struct's declaration order. A value that does not
/// serialize to a JSON object (such as `()`) yields no pairs.
///
/// # Errors
///
/// Returns the underlying serde error if `params` cannot be serialized.
pub fn to_params<T: Serialize>(params: &T) -> Result<Vec<(String, String)>, serde_json::Error> {
    let value = serde_json::to_value(params)?;

    let mut pairs = Vec::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_to_string(item) {
                            pairs.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_to_string(other) {
                        pairs.push((key, text));
                    }
                }
            }
        }
    }

    Ok(pairs)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Complex values are sent as their JSON text
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

/// Serializes an optional date as `YYYY-MM-DD`.
///
/// Use with `#[serde(serialize_with = "...", skip_serializing_if = "Option::is_none")]`.
///
/// # Errors
///
/// Propagates errors from the serializer.
pub fn iso8601_date<S: Serializer>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_none(),
    }
}

/// Serializes an optional timestamp as ISO 8601 (`2024-01-31T13:45:00Z`).
///
/// # Errors
///
/// Propagates errors from the serializer.
pub fn iso8601_datetime<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(datetime) => {
            serializer.serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        None => serializer.serialize_none(),
    }
}
