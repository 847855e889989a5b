//! Query-parameter bridging
//!
//! Extracts page parameters out of an HTTP-style query map and builds
//! the base URI that next-page links hang off of. Malformed paging
//! input degrades to the documented defaults; it never fails the
//! request.

use crate::error::Result;
use crate::page::{PageRequest, QUERY_PAGE, QUERY_PAGE_SIZE};
use crate::types::StringMap;
use tracing::debug;
use url::Url;

/// Parse a [`PageRequest`] from a string-keyed query map
///
/// Reads `page` and `pagesize` (case-sensitive) as decimal unsigned
/// integers. Absent, zero or unparseable values resolve to the
/// defaults, so this cannot fail.
pub fn page_request_from_query(query: &StringMap) -> PageRequest {
    let request = PageRequest::new(
        parse_param(query, QUERY_PAGE),
        parse_param(query, QUERY_PAGE_SIZE),
    );
    debug!(
        page = request.page(),
        page_size = request.page_size(),
        "parsed page request from query"
    );
    request
}

fn parse_param(query: &StringMap, key: &str) -> Option<u32> {
    query.get(key).and_then(|raw| raw.parse().ok())
}

/// Build the base URI for next-page links from request parts
///
/// Mirrors the inbound request's own scheme, host (with optional port)
/// and path: `{scheme}://{host}{path}`. The query string, if any, is
/// irrelevant here; link construction replaces it wholesale.
pub fn base_uri(scheme: &str, host: &str, path: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{scheme}://{host}{path}"))?)
}
