//! REST resource infrastructure.
//!
//! This module provides the generic engine shared by every resource:
//!
//! - **[`Resource`] trait**: endpoint metadata (name, URI templates, parameter types)
//! - **[`ResourceList<R>`]**: the collection root with `create`, `page`, `each` and `list`
//! - **[`InstanceContext<R>`]**: one addressable resource with `fetch`, `update` and `remove`
//! - **[`Instance<R>`]**: an immutable decoded snapshot, `Deref`-ing to its fields
//! - **[`Page<R>`]**: one collection response and its continuation link
//! - **[`ReadLimits`]**: page size and page count resolved from `limit`/`page_size`
//! - **Path building**: [`Solution`] values substituted into [`ResourcePath`] templates
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::{Twilio, TwilioConfig, AccountSid, AuthToken};
//! use twilio_api::rest::{PageOptions, ReadOptions};
//! use twilio_api::rest::resources::v2010::{MessageCreateParams, MessageUpdateParams};
//!
//! let twilio = Twilio::new(config);
//! let messages = twilio.messages();
//!
//! // Create
//! let message = messages.create(&MessageCreateParams {
//!     to: Some("+15558675309".into()),
//!     from: Some("+15017250604".into()),
//!     body: Some("Hello".into()),
//!     ..Default::default()
//! }).await?;
//!
//! // Stream, collect or page
//! messages.each(ReadOptions::with_limit(100), |m| println!("{:?}", m.sid)).await?;
//! let all = messages.list(ReadOptions::default()).await?;
//! let first = messages.page(&PageOptions::default()).await?;
//!
//! // Address one resource
//! let updated = message.update(&MessageUpdateParams { body: Some(String::new()) }).await?;
//! let removed = messages.get("SM123")?.remove().await?;
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`]: Error types for resource operations
//! - [`ResourcePath`] and [`ResourceOperation`]: Path building infrastructure
//! - [`ReadOptions`] and [`PageOptions`]: Per-call options
//! - [`resources`]: Concrete resources (Message, Call, Conversation, ...)

mod context;
pub mod deserialize;
mod errors;
mod instance;
mod limits;
mod list;
mod page;
mod path;
mod resource;
mod solution;
mod values;

pub mod resources;

// Public exports
pub use context::InstanceContext;
pub use errors::ResourceError;
pub use instance::Instance;
pub use limits::{ReadLimits, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use list::{PageOptions, ReadOptions, ResourceList};
pub use page::Page;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{require, Resource, Validate};
pub use solution::Solution;
pub use values::{iso8601_date, iso8601_datetime, to_params};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::clients::{Domain, HttpClient, Version};
    use crate::config::{AccountSid, AuthToken, HostUrl, TwilioConfig};

    /// A version rooted on an address nothing listens on.
    pub fn test_version() -> Arc<Version> {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new("AC1").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        let host = HostUrl::new("http://127.0.0.1:9").unwrap();
        let domain = Domain::new(
            Arc::new(HttpClient::new(&config)),
            "https://api.twilio.com",
            Some(&host),
        );
        Arc::new(Version::new(domain, "2010-04-01"))
    }
}
