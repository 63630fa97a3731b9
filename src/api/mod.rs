//! API service modules for ForTem endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the ForTem developer API.

mod collections;
mod items;
mod users;

pub use collections::CollectionsService;
pub use items::ItemsService;
pub use users::UsersService;

/// Percent-encode a caller-supplied value for use as one path segment.
///
/// Only RFC 3986 unreserved characters are left as-is.
pub(crate) fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
