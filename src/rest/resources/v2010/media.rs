//! Media resource implementation.
//!
//! Media are the files attached to an MMS message. They are read-only: the
//! collection can be paged and individual files fetched or removed.
//!
//! # Paths
//!
//! - `/Accounts/{account_sid}/Messages/{message_sid}/Media.json` (read)
//! - `/Accounts/{account_sid}/Messages/{message_sid}/Media/{sid}.json` (fetch, remove)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{deserialize, Resource, ResourceOperation, ResourcePath};
use crate::HttpMethod;

/// A media file attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Media {
    /// The account that owns the media.
    pub account_sid: Option<String>,

    /// MIME type of the file (e.g. `image/jpeg`).
    pub content_type: Option<String>,

    /// When the media was created.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the media was last updated.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_updated: Option<DateTime<Utc>>,

    /// The message the media belongs to.
    pub parent_sid: Option<String>,

    /// The unique identifier of the media.
    pub sid: Option<String>,

    /// The version-relative URI of this media.
    pub uri: Option<String>,
}

impl Resource for Media {
    type ReadParams = MediaReadParams;
    type CreateParams = ();
    type UpdateParams = ();

    const NAME: &'static str = "Media";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Read,
            &["account_sid", "message_sid"],
            "/Accounts/{account_sid}/Messages/{message_sid}/Media.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Fetch,
            &["account_sid", "message_sid", "sid"],
            "/Accounts/{account_sid}/Messages/{message_sid}/Media/{sid}.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Remove,
            &["account_sid", "message_sid", "sid"],
            "/Accounts/{account_sid}/Messages/{message_sid}/Media/{sid}.json",
        ),
    ];

    fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

/// Filters for reading media.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaReadParams {
    /// Only media created before this date.
    #[serde(
        rename = "DateCreated<",
        serialize_with = "crate::rest::iso8601_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created_before: Option<NaiveDate>,

    /// Only media created on this date.
    #[serde(
        rename = "DateCreated",
        serialize_with = "crate::rest::iso8601_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<NaiveDate>,

    /// Only media created after this date.
    #[serde(
        rename = "DateCreated>",
        serialize_with = "crate::rest::iso8601_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created_after: Option<NaiveDate>,
}
