//! REST resources for Conversations API version `v1`.
//!
//! These resources live on the `conversations` domain and are not scoped to
//! an account path.
//!
//! - [`Conversation`] - A multi-party conversation
//! - [`ConversationState`] - Active, inactive or closed
//! - [`ConversationTimers`] - Scheduled state transitions
//! - [`ConversationCreateParams`] and [`ConversationUpdateParams`]

mod conversation;

pub use conversation::{
    Conversation, ConversationCreateParams, ConversationState, ConversationTimers,
    ConversationUpdateParams,
};
