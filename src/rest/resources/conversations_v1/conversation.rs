//! Conversation resource implementation.
//!
//! # Paths
//!
//! - `/Conversations` (create, read)
//! - `/Conversations/{sid}` (fetch, update, remove)
//!
//! Unlike the 2010 API, list responses carry a `meta` object naming the
//! records key (`conversations`) and an absolute `next_page_url`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{deserialize, Resource, ResourceOperation, ResourcePath, Validate};
use crate::HttpMethod;

/// The lifecycle state of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Open for new messages.
    Active,
    /// Idle; reactivated by the next message.
    Inactive,
    /// Closed for good.
    Closed,
    /// A state this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Automatic state transition times of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConversationTimers {
    /// When the conversation becomes inactive.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_inactive: Option<DateTime<Utc>>,
    /// When the conversation closes.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_closed: Option<DateTime<Utc>>,
}

/// A multi-party conversation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Conversation {
    /// The account that owns the conversation.
    pub account_sid: Option<String>,
    /// The chat service the conversation belongs to.
    pub chat_service_sid: Option<String>,
    /// The messaging service used for SMS participants.
    pub messaging_service_sid: Option<String>,
    /// The unique identifier of the conversation.
    pub sid: Option<String>,
    /// Human readable name.
    pub friendly_name: Option<String>,
    /// Application defined unique name.
    pub unique_name: Option<String>,
    /// Application defined JSON attributes, as a string.
    pub attributes: Option<String>,
    /// The lifecycle state.
    pub state: Option<ConversationState>,
    /// When the conversation was created.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the conversation was last updated.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Scheduled state transitions.
    pub timers: Option<ConversationTimers>,
    /// The absolute URL of this conversation.
    pub url: Option<String>,
    /// URLs of related resources, keyed by name.
    pub links: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Resource for Conversation {
    type ReadParams = ();
    type CreateParams = ConversationCreateParams;
    type UpdateParams = ConversationUpdateParams;

    const NAME: &'static str = "Conversation";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "/Conversations",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Read, &[], "/Conversations"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Fetch,
            &["sid"],
            "/Conversations/{sid}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Update,
            &["sid"],
            "/Conversations/{sid}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Remove,
            &["sid"],
            "/Conversations/{sid}",
        ),
    ];

    fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

/// Parameters for creating a conversation. Every field is optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationCreateParams {
    /// Human readable name.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Application defined unique name.
    #[serde(rename = "UniqueName", skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// Backdated creation time.
    #[serde(
        rename = "DateCreated",
        serialize_with = "crate::rest::iso8601_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,
    /// Backdated update time.
    #[serde(
        rename = "DateUpdated",
        serialize_with = "crate::rest::iso8601_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,
    /// The messaging service used for SMS participants.
    #[serde(rename = "MessagingServiceSid", skip_serializing_if = "Option::is_none")]
    pub messaging_service_sid: Option<String>,
    /// Application defined JSON attributes.
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
    /// Initial state.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<ConversationState>,
}

impl Validate for ConversationCreateParams {}

/// Parameters for updating a conversation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationUpdateParams {
    /// Human readable name.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Creation time override.
    #[serde(
        rename = "DateCreated",
        serialize_with = "crate::rest::iso8601_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,
    /// Update time override.
    #[serde(
        rename = "DateUpdated",
        serialize_with = "crate::rest::iso8601_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,
    /// Application defined JSON attributes.
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
    /// The messaging service used for SMS participants.
    #[serde(rename = "MessagingServiceSid", skip_serializing_if = "Option::is_none")]
    pub messaging_service_sid: Option<String>,
    /// New state.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<ConversationState>,
    /// Application defined unique name.
    #[serde(rename = "UniqueName", skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{to_params, Solution};
    use chrono::TimeZone;

    #[test]
    fn test_conversation_deserialization() {
        let conversation: Conversation = serde_json::from_str(
            r#"{
                "sid": "CH1",
                "account_sid": "AC1",
                "friendly_name": "Support",
                "state": "inactive",
                "date_created": "2015-12-16T22:18:37Z",
                "date_updated": "2015-12-16T22:18:38Z",
                "timers": {"date_inactive": "2015-12-16T22:19:38Z", "date_closed": null},
                "url": "https://conversations.twilio.com/v1/Conversations/CH1",
                "links": {"participants": "https://conversations.twilio.com/v1/Conversations/CH1/Participants"}
            }"#,
        )
        .unwrap();

        assert_eq!(conversation.state, Some(ConversationState::Inactive));
        assert_eq!(
            conversation.date_created,
            Some(Utc.with_ymd_and_hms(2015, 12, 16, 22, 18, 37).unwrap())
        );
        let timers = conversation.timers.unwrap();
        assert!(timers.date_inactive.is_some());
        assert!(timers.date_closed.is_none());
    }

    #[test]
    fn test_paths_have_no_account_segment() {
        assert_eq!(
            Conversation::resolve_uri(ResourceOperation::Read, &Solution::new()).unwrap(),
            "/Conversations"
        );
        assert_eq!(
            Conversation::resolve_uri(ResourceOperation::Remove, &Solution::new().with("sid", "CH1"))
                .unwrap(),
            "/Conversations/CH1"
        );
    }

    #[test]
    fn test_create_params_datetime_format() {
        let params = ConversationCreateParams {
            friendly_name: Some("Support".to_string()),
            date_created: Some(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()),
            state: Some(ConversationState::Closed),
            ..Default::default()
        };
        assert_eq!(
            to_params(&params).unwrap(),
            vec![
                ("FriendlyName".to_string(), "Support".to_string()),
                ("DateCreated".to_string(), "2020-01-02T03:04:05Z".to_string()),
                ("State".to_string(), "closed".to_string()),
            ]
        );
    }
}
