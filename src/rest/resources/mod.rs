//! Version-specific REST resource implementations.
//!
//! Resources are organized by domain and API version, matching the URL
//! layout of the service:
//!
//! ```text
//! resources/
//!   mod.rs             <- This file
//!   v2010/             <- api.twilio.com/2010-04-01
//!   conversations_v1/  <- conversations.twilio.com/v1
//! ```
//!
//! Resources are usually reached through the root client rather than
//! constructed directly:
//!
//! ```rust,ignore
//! use twilio_api::rest::ReadOptions;
//! use twilio_api::rest::resources::v2010::{CallReadParams, CallStatus};
//!
//! // Calls of the configured account that are still ringing
//! let options = ReadOptions {
//!     filters: CallReadParams {
//!         status: Some(CallStatus::Ringing),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let ringing = twilio.calls().list(options).await?;
//!
//! // Conversations live on their own domain
//! let first = twilio.conversations().conversations().page(&Default::default()).await?;
//! ```

pub mod conversations_v1;
pub mod v2010;
