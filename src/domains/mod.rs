//! The root client and its domains.
//!
//! [`Twilio`] owns the configuration and one shared [`HttpClient`]. Domains
//! and their versions are created on first access and reused afterwards:
//!
//! ```text
//! Twilio
//!   api()            -> Api           (https://api.twilio.com)
//!     v2010()        -> V2010         (/2010-04-01)
//!       account(sid) -> Account       (messages, sms_messages, calls, tokens)
//!   conversations()  -> Conversations (https://conversations.twilio.com)
//!     v1()           -> V1            (/v1)
//!       conversations()
//! ```

mod api;
mod conversations;

use std::sync::{Arc, OnceLock};

use crate::clients::HttpClient;
use crate::config::TwilioConfig;
use crate::rest::resources::v2010::{Call, Message, SmsMessage, Token};
use crate::rest::ResourceList;

pub use api::{Account, Api, V2010};
pub use conversations::{Conversations, V1};

/// The entry point of the library.
///
/// # Thread Safety
///
/// `Twilio` is `Send + Sync`; share it behind an `Arc` across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use twilio_api::{AccountSid, AuthToken, Twilio, TwilioConfig};
/// use twilio_api::rest::ReadOptions;
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")?)
///     .auth_token(AuthToken::new("your_auth_token")?)
///     .build()?;
/// let twilio = Twilio::new(config);
///
/// let recent = twilio.messages().list(ReadOptions::with_limit(20)).await?;
/// ```
#[derive(Debug)]
pub struct Twilio {
    config: TwilioConfig,
    http_client: Arc<HttpClient>,
    api: OnceLock<Api>,
    conversations: OnceLock<Conversations>,
}

// Verify Twilio is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Twilio>();
};

impl Twilio {
    /// Creates a client from a configuration.
    #[must_use]
    pub fn new(config: TwilioConfig) -> Self {
        let http_client = Arc::new(HttpClient::new(&config));
        Self {
            config,
            http_client,
            api: OnceLock::new(),
            conversations: OnceLock::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TwilioConfig {
        &self.config
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the `api` domain.
    #[must_use]
    pub fn api(&self) -> &Api {
        self.api
            .get_or_init(|| Api::new(Arc::clone(&self.http_client), self.config.host()))
    }

    /// Returns the `conversations` domain.
    #[must_use]
    pub fn conversations(&self) -> &Conversations {
        self.conversations
            .get_or_init(|| Conversations::new(Arc::clone(&self.http_client), self.config.host()))
    }

    /// Returns the 2010 API resources of the configured account.
    #[must_use]
    pub fn account(&self) -> Account {
        self.api().v2010().account(self.config.account_sid().as_ref())
    }

    /// Messages of the configured account.
    #[must_use]
    pub fn messages(&self) -> ResourceList<Message> {
        self.account().messages()
    }

    /// Legacy SMS messages of the configured account.
    #[must_use]
    pub fn sms_messages(&self) -> ResourceList<SmsMessage> {
        self.account().sms_messages()
    }

    /// Calls of the configured account.
    #[must_use]
    pub fn calls(&self) -> ResourceList<Call> {
        self.account().calls()
    }

    /// Network traversal tokens of the configured account.
    #[must_use]
    pub fn tokens(&self) -> ResourceList<Token> {
        self.account().tokens()
    }
}
