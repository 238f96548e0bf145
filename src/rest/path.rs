//! Path building infrastructure for REST resources.
//!
//! This module provides the path resolution system that maps a resource
//! operation plus its [`Solution`] to a concrete URI.
//!
//! # Path Resolution
//!
//! Every resource declares one [`ResourcePath`] per supported operation. A
//! `Message` for example is addressed through:
//! - `/Accounts/{account_sid}/Messages.json` (create, read)
//! - `/Accounts/{account_sid}/Messages/{sid}.json` (fetch, update, remove)
//!
//! When several paths serve the same operation, the one that uses the most
//! solution parameters wins.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::rest::{ResourcePath, ResourceOperation, Solution, get_path, build_path};
//! use twilio_api::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Fetch,
//!         &["account_sid", "sid"],
//!         "/Accounts/{account_sid}/Messages/{sid}.json",
//!     ),
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Read,
//!         &["account_sid"],
//!         "/Accounts/{account_sid}/Messages.json",
//!     ),
//! ];
//!
//! let solution = Solution::new().with("account_sid", "AC123").with("sid", "SM456");
//! let path = get_path(PATHS, ResourceOperation::Fetch, &solution.keys());
//! assert!(path.is_some());
//!
//! let uri = build_path(path.unwrap().template, &solution);
//! assert_eq!(uri.as_deref(), Some("/Accounts/AC123/Messages/SM456.json"));
//! ```

use crate::clients::HttpMethod;
use crate::rest::Solution;

/// Operations that can be performed on a REST resource.
///
/// Each operation corresponds to a specific HTTP method and URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Create a new resource (POST on the collection URI).
    Create,
    /// Read one page of the collection (GET on the collection URI).
    Read,
    /// Fetch a single resource (GET on the instance URI).
    Fetch,
    /// Update an existing resource (POST on the instance URI).
    Update,
    /// Remove a resource (DELETE on the instance URI).
    Remove,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Read | Self::Fetch => HttpMethod::Get,
            Self::Create | Self::Update => HttpMethod::Post,
            Self::Remove => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Fetch => "fetch",
            Self::Update => "update",
            Self::Remove => "remove",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// # Path Templates
///
/// Templates use `{name}` placeholders filled from the [`Solution`]:
/// - `/Conversations/{sid}` - Single parameter
/// - `/Accounts/{account_sid}/Calls/{call_sid}/Feedback.json` - Multiple parameters
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::{ResourcePath, ResourceOperation};
/// use twilio_api::HttpMethod;
///
/// const CALL_FETCH: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Fetch,
///     &["account_sid", "sid"],
///     "/Accounts/{account_sid}/Calls/{sid}.json",
/// );
/// assert_eq!(CALL_FETCH.id_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required solution parameters in order (e.g., `["account_sid", "sid"]`).
    pub ids: &'static [&'static str],
    /// The URI template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required parameters for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required parameters are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// The function filters paths by operation type and then selects the
/// path that:
/// 1. Has all required parameters available
/// 2. Has the most required parameters (most specific)
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::{ResourcePath, ResourceOperation, get_path};
/// use twilio_api::HttpMethod;
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::Read, &["account_sid"], "/Accounts/{account_sid}/Calls.json"),
/// ];
///
/// assert!(get_path(PATHS, ResourceOperation::Read, &["account_sid"]).is_some());
/// assert!(get_path(PATHS, ResourceOperation::Read, &[]).is_none());
/// assert!(get_path(PATHS, ResourceOperation::Remove, &["account_sid"]).is_none());
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URI from a template by interpolating solution values.
///
/// Values are percent-encoded so an identifier can never escape its path
/// segment. Returns `None` when a placeholder has no value in the solution
/// or its value is empty.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::{build_path, Solution};
///
/// let solution = Solution::new().with("sid", "CH 1");
/// assert_eq!(build_path("/Conversations/{sid}", &solution).as_deref(), Some("/Conversations/CH%201"));
/// assert_eq!(build_path("/Conversations/{missing}", &solution), None);
/// assert_eq!(build_path("/Conversations/{sid}", &Solution::new().with("sid", "")), None);
/// ```
#[must_use]
pub fn build_path(template: &str, solution: &Solution) -> Option<String> {
    let mut result = template.to_string();

    for (key, value) in solution.iter() {
        let placeholder = format!("{{{key}}}");
        if result.contains(&placeholder) {
            if value.is_empty() {
                return None;
            }
            result = result.replace(&placeholder, &urlencoding::encode(value));
        }
    }

    if result.contains('{') {
        return None;
    }
    Some(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const MEDIA_PATHS: &[ResourcePath] = &[
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

    #[test]
    fn test_resource_path_stores_fields_correctly() {
        let path = MEDIA_PATHS[1];
        assert_eq!(path.http_method, HttpMethod::Get);
        assert_eq!(path.operation, ResourceOperation::Fetch);
        assert_eq!(path.ids, &["account_sid", "message_sid", "sid"]);
        assert_eq!(path.id_count(), 3);
    }

    #[test]
    fn test_build_path_interpolates_multiple_ids() {
        let solution = Solution::new()
            .with("account_sid", "AC1")
            .with("message_sid", "MM2")
            .with("sid", "ME3");

        let result = build_path(MEDIA_PATHS[1].template, &solution);
        assert_eq!(
            result.as_deref(),
            Some("/Accounts/AC1/Messages/MM2/Media/ME3.json")
        );
    }

    #[test]
    fn test_build_path_ignores_unused_solution_keys() {
        let solution = Solution::new()
            .with("account_sid", "AC1")
            .with("sid", "unused");

        let result = build_path("/Accounts/{account_sid}/Tokens.json", &solution);
        assert_eq!(result.as_deref(), Some("/Accounts/AC1/Tokens.json"));
    }

    #[test]
    fn test_build_path_returns_none_for_unfilled_placeholder() {
        let solution = Solution::new().with("account_sid", "AC1");
        assert!(build_path(MEDIA_PATHS[0].template, &solution).is_none());
    }

    #[test]
    fn test_build_path_rejects_empty_value() {
        let solution = Solution::new().with("account_sid", "AC1").with("sid", "");
        assert!(build_path("/Accounts/{account_sid}/Messages/{sid}.json", &solution).is_none());
        assert_eq!(
            build_path("/Accounts/{account_sid}/Messages.json", &solution).as_deref(),
            Some("/Accounts/AC1/Messages.json")
        );
    }

    #[test]
    fn test_build_path_encodes_reserved_characters() {
        let solution = Solution::new().with("sid", "a/b?c");
        assert_eq!(
            build_path("/Conversations/{sid}", &solution).as_deref(),
            Some("/Conversations/a%2Fb%3Fc")
        );
    }

    #[test]
    fn test_get_path_filters_by_operation_and_ids() {
        let read = get_path(MEDIA_PATHS, ResourceOperation::Read, &["account_sid", "message_sid"]);
        assert_eq!(
            read.unwrap().template,
            "/Accounts/{account_sid}/Messages/{message_sid}/Media.json"
        );

        let remove = get_path(
            MEDIA_PATHS,
            ResourceOperation::Remove,
            &["account_sid", "message_sid", "sid"],
        );
        assert_eq!(remove.unwrap().http_method, HttpMethod::Delete);

        // Missing sid
        assert!(get_path(
            MEDIA_PATHS,
            ResourceOperation::Fetch,
            &["account_sid", "message_sid"]
        )
        .is_none());

        // Unsupported operation
        assert!(get_path(
            MEDIA_PATHS,
            ResourceOperation::Update,
            &["account_sid", "message_sid", "sid"]
        )
        .is_none());
    }

    #[test]
    fn test_get_path_selects_most_specific_path() {
        const PATHS: &[ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Read,
                &[],
                "/Conversations",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Read,
                &["service_sid"],
                "/Services/{service_sid}/Conversations",
            ),
        ];

        let path = get_path(PATHS, ResourceOperation::Read, &["service_sid"]);
        assert_eq!(path.unwrap().template, "/Services/{service_sid}/Conversations");

        let path = get_path(PATHS, ResourceOperation::Read, &[]);
        assert_eq!(path.unwrap().template, "/Conversations");
    }

    #[test]
    fn test_resource_operation_default_http_method() {
        assert_eq!(ResourceOperation::Create.default_http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Read.default_http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Fetch.default_http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Update.default_http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Remove.default_http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_resource_operation_as_str() {
        assert_eq!(ResourceOperation::Read.as_str(), "read");
        assert_eq!(ResourceOperation::Remove.as_str(), "remove");
    }
}
