//! Domain and version plumbing for REST resources.
//!
//! A [`Domain`] knows the base URL of one product area of the API
//! (`https://api.twilio.com`, `https://conversations.twilio.com`). A
//! [`Version`] combines a domain with a version segment (`2010-04-01`, `v1`)
//! and exposes the low-level `page`/`fetch`/`create`/`update`/`remove`
//! primitives plus the pagination limit resolution the resource engine
//! relies on.

mod errors;
mod version;

pub use errors::RestError;
pub use version::{Domain, Version};
