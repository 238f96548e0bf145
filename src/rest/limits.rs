//! Pagination limit resolution.

use crate::rest::ResourceError;

/// Page size used when neither `limit` nor `page_size` is given.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page the service will return.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Limits resolved once per `each`/`list` invocation.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::ReadLimits;
///
/// let limits = ReadLimits::resolve(Some(120), Some(50)).unwrap();
/// assert_eq!(limits.page_size, 50);
/// assert_eq!(limits.page_limit, Some(3));
///
/// // Never requests a larger page than `limit` needs.
/// let limits = ReadLimits::resolve(Some(20), None).unwrap();
/// assert_eq!(limits.page_size, 20);
///
/// let limits = ReadLimits::resolve(None, None).unwrap();
/// assert_eq!(limits.page_size, 50);
/// assert_eq!(limits.page_limit, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadLimits {
    /// Maximum number of records to deliver; `None` means all of them.
    pub limit: Option<u32>,
    /// Page size requested from the service.
    pub page_size: u32,
    /// Maximum number of pages to fetch; `None` means unbounded.
    pub page_limit: Option<u32>,
}

impl ReadLimits {
    /// Resolves `limit` and `page_size` into effective limits.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if `limit` or `page_size`
    /// is zero.
    pub fn resolve(limit: Option<u32>, page_size: Option<u32>) -> Result<Self, ResourceError> {
        if limit == Some(0) {
            return Err(ResourceError::InvalidArgument {
                message: "limit must be greater than zero".to_string(),
            });
        }
        if page_size == Some(0) {
            return Err(ResourceError::InvalidArgument {
                message: "page_size must be greater than zero".to_string(),
            });
        }

        let page_size = page_size.unwrap_or_else(|| {
            limit.map_or(DEFAULT_PAGE_SIZE, |limit| limit.min(MAX_PAGE_SIZE))
        });
        let page_limit = limit.map(|limit| limit.div_ceil(page_size));

        Ok(Self {
            limit,
            page_size,
            page_limit,
        })
    }
}
