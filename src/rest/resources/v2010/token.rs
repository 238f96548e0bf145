//! Token resource implementation.
//!
//! Tokens are short-lived credentials for the Network Traversal Service
//! (STUN/TURN). They can only be created; a token has no sid and therefore
//! no context.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::v2010::TokenCreateParams;
//!
//! let token = twilio.tokens().create(&TokenCreateParams { ttl: Some(3600) }).await?;
//! for server in token.ice_servers.iter().flatten() {
//!     println!("{}", server.url.as_deref().unwrap_or_default());
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{deserialize, Resource, ResourceOperation, ResourcePath, Validate};
use crate::HttpMethod;

/// A STUN/TURN server entry of a token.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IceServer {
    /// The server URL (`stun:` or `turn:`).
    pub url: Option<String>,
    /// Alternate spelling of `url` sent by newer API versions.
    pub urls: Option<String>,
    /// Username for TURN servers.
    pub username: Option<String>,
    /// Credential for TURN servers.
    pub credential: Option<String>,
}

/// Network traversal credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Token {
    /// The account that created the token.
    pub account_sid: Option<String>,
    /// When the token was created.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the token was last updated.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// The servers the credentials are valid for.
    pub ice_servers: Option<Vec<IceServer>>,
    /// The TURN password.
    pub password: Option<String>,
    /// Lifetime of the credentials in seconds.
    #[serde(default, deserialize_with = "deserialize::option_integer")]
    pub ttl: Option<i64>,
    /// The TURN username.
    pub username: Option<String>,
}

impl Resource for Token {
    type ReadParams = ();
    type CreateParams = TokenCreateParams;
    type UpdateParams = ();

    const NAME: &'static str = "Token";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Post,
        ResourceOperation::Create,
        &["account_sid"],
        "/Accounts/{account_sid}/Tokens.json",
    )];

    fn sid(&self) -> Option<&str> {
        None
    }
}

/// Parameters for creating a token.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenCreateParams {
    /// Lifetime of the credentials in seconds.
    #[serde(rename = "Ttl", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl Validate for TokenCreateParams {}
