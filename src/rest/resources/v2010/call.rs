//! Call resource implementation.
//!
//! This module provides the [`Call`] resource for placing, reading and
//! modifying voice calls, plus access to each call's
//! [`Feedback`](super::Feedback).
//!
//! # Paths
//!
//! - `/Accounts/{account_sid}/Calls.json` (create, read)
//! - `/Accounts/{account_sid}/Calls/{sid}.json` (fetch, update, remove)
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::v2010::{CallCreateParams, FeedbackCreateParams};
//!
//! let call = twilio.calls().create(&CallCreateParams {
//!     to: Some("+14158675309".to_string()),
//!     from: Some("+16517779311".to_string()),
//!     url: Some("https://demo.twilio.com/welcome/voice".to_string()),
//!     ..Default::default()
//! }).await?;
//!
//! // Rate the call afterwards
//! call.feedback()?.create(&FeedbackCreateParams {
//!     quality_score: Some(3),
//!     issue: vec!["dropped-call".to_string()],
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Feedback;
use crate::rest::{
    deserialize, Instance, InstanceContext, Resource, ResourceError, ResourceOperation,
    ResourcePath, Solution, Validate,
};
use crate::HttpMethod;

/// The status of a call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    /// Waiting to be placed.
    Queued,
    /// Ringing at the destination.
    Ringing,
    /// Answered and in progress.
    InProgress,
    /// Cancelled while queued or ringing.
    Canceled,
    /// Finished normally.
    Completed,
    /// Could not be placed.
    Failed,
    /// The destination was busy.
    Busy,
    /// Nobody answered.
    NoAnswer,
    /// A status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A voice call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Call {
    /// The account that owns the call.
    pub account_sid: Option<String>,
    /// Machine detection result, when enabled.
    pub answered_by: Option<String>,
    /// The API version used to create the call.
    pub api_version: Option<String>,
    /// Caller id name lookup result.
    pub caller_name: Option<String>,
    /// When the call was created.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the call was last updated.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// `inbound`, `outbound-api` or `outbound-dial`.
    pub direction: Option<String>,
    /// Length of the call in seconds.
    #[serde(default, deserialize_with = "deserialize::option_integer")]
    pub duration: Option<i64>,
    /// When the call ended.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub end_time: Option<DateTime<Utc>>,
    /// The forwarding number, if the call was forwarded.
    pub forwarded_from: Option<String>,
    /// The caller.
    pub from: Option<String>,
    /// The caller, formatted for display.
    pub from_formatted: Option<String>,
    /// The call that created this one, for dialed legs.
    pub parent_call_sid: Option<String>,
    /// The phone number resource used.
    pub phone_number_sid: Option<String>,
    /// The amount billed for the call.
    #[serde(default, deserialize_with = "deserialize::option_decimal")]
    pub price: Option<Decimal>,
    /// The currency of `price`.
    pub price_unit: Option<String>,
    /// The unique identifier of the call.
    pub sid: Option<String>,
    /// When the call started.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub start_time: Option<DateTime<Utc>>,
    /// The status of the call.
    pub status: Option<CallStatus>,
    /// URIs of related sub-resources, keyed by name.
    pub subresource_uris: Option<serde_json::Map<String, serde_json::Value>>,
    /// The callee.
    pub to: Option<String>,
    /// The callee, formatted for display.
    pub to_formatted: Option<String>,
    /// The version-relative URI of this call.
    pub uri: Option<String>,
}

impl Resource for Call {
    type ReadParams = CallReadParams;
    type CreateParams = CallCreateParams;
    type UpdateParams = CallUpdateParams;

    const NAME: &'static str = "Call";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["account_sid"],
            "/Accounts/{account_sid}/Calls.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Read,
            &["account_sid"],
            "/Accounts/{account_sid}/Calls.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Fetch,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/Calls/{sid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Update,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/Calls/{sid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Remove,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/Calls/{sid}.json",
        ),
    ];

    fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

/// Parameters for placing a call.
///
/// `to` and `from` are required, together with either `url` or
/// `application_sid`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CallCreateParams {
    /// The number, client or SIP address to call.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// The caller id.
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// URL returning the TwiML that drives the call.
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Application whose voice URL drives the call.
    #[serde(rename = "ApplicationSid", skip_serializing_if = "Option::is_none")]
    pub application_sid: Option<String>,
    /// HTTP method used to request `url`.
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// URL requested if `url` fails.
    #[serde(rename = "FallbackUrl", skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
    /// URL notified when the call ends.
    #[serde(rename = "StatusCallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
    /// Digits to send after the call connects.
    #[serde(rename = "SendDigits", skip_serializing_if = "Option::is_none")]
    pub send_digits: Option<String>,
    /// Seconds to let the call ring.
    #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Whether to record the call.
    #[serde(rename = "Record", skip_serializing_if = "Option::is_none")]
    pub record: Option<bool>,
}

impl Validate for CallCreateParams {
    fn validate(&self) -> Result<(), ResourceError> {
        crate::rest::require::<Call, _>("To", self.to.as_ref())?;
        crate::rest::require::<Call, _>("From", self.from.as_ref())?;
        if self.url.is_none() && self.application_sid.is_none() {
            return Err(ResourceError::MissingRequiredField {
                resource: Call::NAME,
                field: "Url",
            });
        }
        Ok(())
    }
}

/// Filters for reading calls.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CallReadParams {
    /// Only calls to this number.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Only calls from this number.
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Only legs of this parent call.
    #[serde(rename = "ParentCallSid", skip_serializing_if = "Option::is_none")]
    pub parent_call_sid: Option<String>,
    /// Only calls with this status.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<CallStatus>,
    /// Only calls started before this time.
    #[serde(
        rename = "StartTime<",
        serialize_with = "crate::rest::iso8601_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time_before: Option<DateTime<Utc>>,
    /// Only calls started at this time.
    #[serde(
        rename = "StartTime",
        serialize_with = "crate::rest::iso8601_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Only calls started after this time.
    #[serde(
        rename = "StartTime>",
        serialize_with = "crate::rest::iso8601_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time_after: Option<DateTime<Utc>>,
}

/// Parameters for modifying a call in progress.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CallUpdateParams {
    /// New TwiML URL to redirect the call to.
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// HTTP method used to request `url`.
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// `canceled` or `completed` to end the call.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<CallStatus>,
    /// URL notified when the call ends.
    #[serde(rename = "StatusCallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
}

impl InstanceContext<Call> {
    /// Returns the feedback context of this call.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the account sid is
    /// missing from this context.
    pub fn feedback(&self) -> Result<InstanceContext<Feedback>, ResourceError> {
        let mut solution = Solution::new();
        if let Some(account_sid) = self.solution().get("account_sid") {
            solution = solution.with("account_sid", account_sid);
        }
        if let Some(sid) = self.solution().sid() {
            solution = solution.with("call_sid", sid);
        }
        InstanceContext::new(std::sync::Arc::clone(self.version()), solution)
    }
}

impl Instance<Call> {
    /// Returns the feedback context of this call.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the call has no sid.
    pub fn feedback(&self) -> Result<InstanceContext<Feedback>, ResourceError> {
        self.context()?.feedback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::to_params;

    fn valid_params() -> CallCreateParams {
        CallCreateParams {
            to: Some("+14158675309".to_string()),
            from: Some("+16517779311".to_string()),
            url: Some("https://demo.twilio.com/welcome/voice".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_params_wire_format() {
        assert_eq!(
            to_params(&valid_params()).unwrap(),
            vec![
                ("To".to_string(), "+14158675309".to_string()),
                ("From".to_string(), "+16517779311".to_string()),
                ("Url".to_string(), "https://demo.twilio.com/welcome/voice".to_string()),
            ]
        );
    }

    #[test]
    fn test_create_requires_url_or_application() {
        let params = CallCreateParams {
            url: None,
            ..valid_params()
        };
        assert!(matches!(
            params.validate(),
            Err(ResourceError::MissingRequiredField { field: "Url", .. })
        ));

        let params = CallCreateParams {
            url: None,
            application_sid: Some("AP1".to_string()),
            ..valid_params()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_call_deserialization() {
        let call: Call = serde_json::from_str(
            r#"{
                "sid": "CA1",
                "status": "in-progress",
                "duration": "15",
                "price": "-0.03000",
                "start_time": "Tue, 31 Aug 2010 20:36:29 +0000",
                "end_time": null
            }"#,
        )
        .unwrap();

        assert_eq!(call.status, Some(CallStatus::InProgress));
        assert_eq!(call.duration, Some(15));
        assert_eq!(call.price, Some(Decimal::new(-3000, 5)));
        assert!(call.start_time.is_some());
        assert!(call.end_time.is_none());
    }

    #[test]
    fn test_update_status_serializes_kebab_case() {
        let params = CallUpdateParams {
            status: Some(CallStatus::Completed),
            ..Default::default()
        };
        assert_eq!(
            to_params(&params).unwrap(),
            vec![("Status".to_string(), "completed".to_string())]
        );
    }

    #[test]
    fn test_feedback_context_uri() {
        let version = crate::rest::test_support::test_version();
        let solution = Solution::new().with("account_sid", "AC1").with("sid", "CA9");
        let call = InstanceContext::<Call>::new(version, solution).unwrap();

        let feedback = call.feedback().unwrap();
        assert_eq!(feedback.uri(), "/Accounts/AC1/Calls/CA9/Feedback.json");
    }
}
