//! # Twilio API Rust Client
//!
//! A Rust client for the Twilio REST API, providing type-safe configuration,
//! an async HTTP client with retry handling, and a generic resource engine
//! that turns every paged collection endpoint into the same three access
//! modes: streaming, materialized list, and single page.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TwilioConfig`] and [`TwilioConfigBuilder`]
//! - Validated newtypes for credentials and the host override
//! - The root client [`Twilio`] with lazily created domains and versions
//! - Resource lists with `create`, `page`, `each` and `list`
//! - Resource contexts and instances with `fetch`, `update` and `remove`
//! - Cancelable, memory-bounded pagination with `limit`/`page_size` control
//! - Async HTTP client with retry logic and rate limit handling
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, Twilio, TwilioConfig};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX").unwrap())
//!     .auth_token(AuthToken::new("your_auth_token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let twilio = Twilio::new(config);
//! let messages = twilio.messages();
//! assert_eq!(messages.solution().get("account_sid"), Some("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX"));
//! ```
//!
//! ## Reading Collections
//!
//! ```rust,ignore
//! use twilio_api::rest::{PageOptions, ReadOptions};
//! use twilio_api::rest::resources::v2010::MessageReadParams;
//!
//! // Stream at most 120 records, 50 per request
//! let options = ReadOptions {
//!     limit: Some(120),
//!     page_size: Some(50),
//!     ..Default::default()
//! };
//! twilio.messages().each(options, |message| {
//!     println!("{:?} {:?}", message.sid, message.status);
//! }).await?;
//!
//! // Or collect everything matching a filter
//! let to_me = twilio.messages().list(ReadOptions {
//!     filters: MessageReadParams {
//!         to: Some("+15558675309".to_string()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! }).await?;
//!
//! // Or walk pages by hand
//! let mut page = twilio.messages().page(&PageOptions::default()).await?;
//! while let Some(next) = page.next_page().await? {
//!     page = next;
//! }
//! ```
//!
//! ## Cancellation
//!
//! ```rust,ignore
//! use tokio_util::sync::CancellationToken;
//! use twilio_api::rest::{ReadOptions, ResourceError};
//!
//! let token = CancellationToken::new();
//! let result = twilio
//!     .calls()
//!     .each_with_cancellation(ReadOptions::default(), &token, |call| {
//!         if call.duration.unwrap_or_default() > 600 {
//!             token.cancel();
//!         }
//!     })
//!     .await;
//! assert!(matches!(result, Err(ResourceError::Cancelled)) || result.is_ok());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction and required
//!   parameters are checked before any request is sent
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable instances**: Fetched resources are snapshots; operations
//!   return new instances

pub mod clients;
pub mod config;
pub mod domains;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccountSid, AuthToken, HostUrl, TwilioConfig, TwilioConfigBuilder};
pub use domains::Twilio;
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RequestBody,
};
