//! Message resource implementation.
//!
//! This module provides the [`Message`] resource for sending and reading
//! SMS/MMS messages of an account.
//!
//! # Paths
//!
//! - `/Accounts/{account_sid}/Messages.json` (create, read)
//! - `/Accounts/{account_sid}/Messages/{sid}.json` (fetch, update, remove)
//!
//! Each message owns a [`Media`](super::Media) sub-collection, reachable
//! through [`InstanceContext::media`] or [`Instance::media`].
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::ReadOptions;
//! use twilio_api::rest::resources::v2010::{MessageCreateParams, MessageReadParams};
//!
//! let sent = twilio.messages().create(&MessageCreateParams {
//!     to: Some("+15558675309".to_string()),
//!     from: Some("+15017250604".to_string()),
//!     body: Some("Ahoy".to_string()),
//!     media_url: vec!["https://demo.twilio.com/owl.png".to_string()],
//!     ..Default::default()
//! }).await?;
//!
//! // Messages sent to one number before March
//! let options = ReadOptions {
//!     filters: MessageReadParams {
//!         to: Some("+15558675309".to_string()),
//!         date_sent_before: chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let recent = twilio.messages().list(options).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Media;
use crate::rest::{
    deserialize, require, Instance, InstanceContext, Resource, ResourceError, ResourceList,
    ResourceOperation, ResourcePath, Validate,
};
use crate::HttpMethod;

/// The delivery status of a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    /// Accepted by the service, not yet queued.
    Accepted,
    /// Queued for sending.
    Queued,
    /// Being sent.
    Sending,
    /// Handed to the carrier.
    Sent,
    /// Could not be sent.
    Failed,
    /// Confirmed delivered by the carrier.
    Delivered,
    /// The carrier reported non-delivery.
    Undelivered,
    /// An inbound message being received.
    Receiving,
    /// An inbound message that was received.
    Received,
    /// A status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// The direction of a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MessageDirection {
    /// Received by the account.
    Inbound,
    /// Sent through the API.
    OutboundApi,
    /// Sent in reply to an inbound message.
    OutboundReply,
    /// Sent by a call.
    OutboundCall,
    /// A direction this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A message sent or received by an account.
///
/// All fields are optional: absent or `null` payload fields decode to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Message {
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

    /// Inbound or one of the outbound directions.
    pub direction: Option<MessageDirection>,

    /// The error code of a failed message.
    #[serde(default, deserialize_with = "deserialize::option_integer")]
    pub error_code: Option<i64>,

    /// The error description of a failed message.
    pub error_message: Option<String>,

    /// The sender.
    pub from: Option<String>,

    /// Number of media files attached.
    #[serde(default, deserialize_with = "deserialize::option_integer")]
    pub num_media: Option<i64>,

    /// Number of segments the body was split into.
    #[serde(default, deserialize_with = "deserialize::option_integer")]
    pub num_segments: Option<i64>,

    /// The amount billed for the message.
    #[serde(default, deserialize_with = "deserialize::option_decimal")]
    pub price: Option<Decimal>,

    /// The currency of `price` (ISO 4217).
    pub price_unit: Option<String>,

    /// The unique identifier of the message.
    pub sid: Option<String>,

    /// The delivery status.
    pub status: Option<MessageStatus>,

    /// URIs of related sub-resources, keyed by name.
    pub subresource_uris: Option<serde_json::Map<String, serde_json::Value>>,

    /// The recipient.
    pub to: Option<String>,

    /// The version-relative URI of this message.
    pub uri: Option<String>,
}

impl Resource for Message {
    type ReadParams = MessageReadParams;
    type CreateParams = MessageCreateParams;
    type UpdateParams = MessageUpdateParams;

    const NAME: &'static str = "Message";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["account_sid"],
            "/Accounts/{account_sid}/Messages.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Read,
            &["account_sid"],
            "/Accounts/{account_sid}/Messages.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Fetch,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/Messages/{sid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Update,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/Messages/{sid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Remove,
            &["account_sid", "sid"],
            "/Accounts/{account_sid}/Messages/{sid}.json",
        ),
    ];

    fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

/// Parameters for creating a message.
///
/// `to` and `from` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageCreateParams {
    /// The recipient's phone number.
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// The sending phone number or sender id.
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

impl Validate for MessageCreateParams {
    fn validate(&self) -> Result<(), ResourceError> {
        require::<Message, _>("To", self.to.as_ref())?;
        require::<Message, _>("From", self.from.as_ref())
    }
}

/// Filters for reading messages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageReadParams {
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

/// Parameters for updating a message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageUpdateParams {
    /// The new body; an empty string redacts the message.
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl InstanceContext<Message> {
    /// Returns the media attached to this message.
    #[must_use]
    pub fn media(&self) -> ResourceList<Media> {
        media_list(self.version(), self.solution())
    }
}

impl Instance<Message> {
    /// Returns the media attached to this message.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the message has no sid.
    pub fn media(&self) -> Result<ResourceList<Media>, ResourceError> {
        Ok(self.context()?.media())
    }
}

fn media_list(
    version: &std::sync::Arc<crate::clients::Version>,
    solution: &crate::rest::Solution,
) -> ResourceList<Media> {
    let mut media_solution = crate::rest::Solution::new();
    if let Some(account_sid) = solution.get("account_sid") {
        media_solution = media_solution.with("account_sid", account_sid);
    }
    if let Some(sid) = solution.sid() {
        media_solution = media_solution.with("message_sid", sid);
    }
    ResourceList::new(std::sync::Arc::clone(version), media_solution)
}
