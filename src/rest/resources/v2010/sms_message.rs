//! SmsMessage resource implementation.
//!
//! The legacy SMS endpoint. It behaves like [`Message`](super::Message) but
//! lives under `/SMS/Messages` and exposes fewer fields.
//!
//! # Paths
//!
//! - `/Accounts/{account_sid}/SMS/Messages.json` (create, read)
//! - `/Accounts/{account_sid}/SMS/Messages/{sid}.json` (fetch, update, remove)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{
    deserialize, require, Resource, ResourceError, ResourceOperation, ResourcePath, Validate,
};
use crate::HttpMethod;

/// A message sent or received through the legacy SMS endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SmsMessage {
    /// The account that sent or received the message.
    pub account_sid: Option<String>,
    /// The API version used to process the message.
    pub api_version: Option<String>,
    /// The message text.
    pub body: Option<String>,
    /// When the message was created.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the message was last updated.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// When the message was sent.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_sent: Option<DateTime<Utc>>,
    /// `inbound`, `outbound-api`, `outbound-call` or `outbound-reply`.
    pub direction: Option<String>,
    /// The sender.
    pub from: Option<String>,
    /// The amount billed for the message.
    #[serde(default, deserialize_with = "deserialize::option_decimal")]
    pub price: Option<Decimal>,
    /// The currency of `price`.
    pub price_unit: Option<String>,
    /// The unique identifier of the message.
    pub sid: Option<String>,
    /// The delivery status.
    pub status: Option<String>,
    /// The recipient.
    pub to: Option<String>,
    /// The version-relative URI of this message.
    pub uri: Option<String>,
}

impl Resource for SmsMessage {
    type ReadParams = SmsMessageReadParams;
    type CreateParams = SmsMessageCreateParams;
    type UpdateParams = SmsMessageUpdateParams;

    const NAME: &'static str = "SmsMessage";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["account_sid"],
            "/Accounts/{account_sid}/SMS/Messages.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Read,
            &["account_sid"],
            "/Accounts/{account_sid}/SMS/Messages.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Fetch,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/SMS/Messages/{sid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Update,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/SMS/Messages/{sid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Remove,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/SMS/Messages/{sid}.json",
        ),
    ];

    fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

/// Parameters for creating an SMS message. `to` and `from` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SmsMessageCreateParams {
    /// The recipient's phone number.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// The sending phone number.
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// URL notified of status changes.
    #[serde(rename = "StatusCallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
    /// Application whose status callback is used.
    #[serde(rename = "ApplicationSid", skip_serializing_if = "Option::is_none")]
    pub application_sid: Option<String>,
    /// The message text.
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Media to attach; sent as one `MediaUrl` per entry.
    #[serde(rename = "MediaUrl", skip_serializing_if = "Vec::is_empty")]
    pub media_url: Vec<String>,
}

impl Validate for SmsMessageCreateParams {
    fn validate(&self) -> Result<(), ResourceError> {
        require::<SmsMessage, _>("To", self.to.as_ref())?;
        require::<SmsMessage, _>("From", self.from.as_ref())
    }
}

/// Filters for reading SMS messages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SmsMessageReadParams {
    /// Only messages sent to this number.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Only messages sent from this number.
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Only messages sent before this date.
    #[serde(
        rename = "DateSent<",
        serialize_with = "crate::rest::iso8601_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_sent_before: Option<NaiveDate>,
    /// Only messages sent on this date.
    #[serde(
        rename = "DateSent",
        serialize_with = "crate::rest::iso8601_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_sent: Option<NaiveDate>,
    /// Only messages sent after this date.
    #[serde(
        rename = "DateSent>",
        serialize_with = "crate::rest::iso8601_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_sent_after: Option<NaiveDate>,
}

/// Parameters for updating an SMS message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SmsMessageUpdateParams {
    /// The new body.
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
