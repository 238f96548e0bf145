//! REST resources for API version 2010-04-01.
//!
//! These resources live on the `api` domain and are scoped to an account:
//! every path starts with `/Accounts/{account_sid}`.
//!
//! # Available Resources
//!
//! ## Message Resource
//!
//! - [`Message`] - An SMS/MMS message
//! - [`MessageStatus`] - Delivery status (queued, sent, delivered, ...)
//! - [`MessageDirection`] - Inbound or one of the outbound kinds
//! - [`MessageCreateParams`] - Parameters for sending (`To` and `From` required)
//! - [`MessageReadParams`] - Filters, including the `DateSent<`/`DateSent>` ranges
//! - [`MessageUpdateParams`] - Parameters for redacting a body
//!
//! ## Media Resource
//!
//! - [`Media`] - A file attached to a message
//! - [`MediaReadParams`] - Filters for reading media
//!
//! Media is nested under messages: `/Messages/{message_sid}/Media/{sid}`
//!
//! ## `SmsMessage` Resource
//!
//! - [`SmsMessage`] - A message on the legacy `/SMS/Messages` endpoint
//! - [`SmsMessageCreateParams`], [`SmsMessageReadParams`], [`SmsMessageUpdateParams`]
//!
//! ## Call Resource
//!
//! - [`Call`] - A voice call
//! - [`CallStatus`] - The status of a call
//! - [`CallCreateParams`] - Parameters for placing a call
//! - [`CallReadParams`] - Filters, including the `StartTime<`/`StartTime>` ranges
//! - [`CallUpdateParams`] - Parameters for redirecting or ending a call
//!
//! ## Feedback Resource
//!
//! - [`Feedback`] - Quality feedback, a singleton under one call
//! - [`FeedbackCreateParams`] - Score and issues (`QualityScore` required)
//!
//! ## Token Resource
//!
//! - [`Token`] - Network traversal credentials (create only)
//! - [`IceServer`] - One STUN/TURN server of a token
//! - [`TokenCreateParams`] - Parameters for creating a token

mod call;
mod feedback;
mod media;
mod message;
mod sms_message;
mod token;

pub use call::{Call, CallCreateParams, CallReadParams, CallStatus, CallUpdateParams};
pub use feedback::{Feedback, FeedbackCreateParams};
pub use media::{Media, MediaReadParams};
pub use message::{
    Message, MessageCreateParams, MessageDirection, MessageReadParams, MessageStatus,
    MessageUpdateParams,
};
pub use sms_message::{
    SmsMessage, SmsMessageCreateParams, SmsMessageReadParams, SmsMessageUpdateParams,
};
pub use token::{IceServer, Token, TokenCreateParams};
