//! Page request and result types
//!
//! The value types every entry point passes around, plus the next-link
//! construction shared with the query bridge.

use serde::Serialize;
use url::Url;

/// Query parameter carrying the 1-based page number
pub const QUERY_PAGE: &str = "page";

/// Query parameter carrying the page size
pub const QUERY_PAGE_SIZE: &str = "pagesize";

// ============================================================================
// PageRequest
// ============================================================================

/// An immutable, normalized page number and size pair
///
/// Both fields are positive after construction: absent or zero inputs
/// collapse to [`PageRequest::DEFAULT_PAGE`] and
/// [`PageRequest::DEFAULT_PAGE_SIZE`]. Page numbers are 1-based
/// everywhere, including the HTTP `page` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Page number used when the caller supplies none
    pub const DEFAULT_PAGE: u32 = 1;

    /// Page size used when the caller supplies none
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Create a request, replacing absent or zero values with defaults
    ///
    /// Cannot fail; it only normalizes.
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: match page {
                None | Some(0) => Self::DEFAULT_PAGE,
                Some(page) => page,
            },
            page_size: match page_size {
                None | Some(0) => Self::DEFAULT_PAGE_SIZE,
                Some(page_size) => page_size,
            },
        }
    }

    /// The 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The maximum number of entities in the page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of entities a source skips before this page,
    /// `(page - 1) * page_size`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// The request for the following page, size carried forward unchanged
    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            page_size: self.page_size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ============================================================================
// ResultPage
// ============================================================================

/// One page of entities paired with the request that produced it
///
/// The source is trusted to respect the requested size; this layer reads
/// the slice length but never truncates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPage<T> {
    request: PageRequest,
    results: Vec<T>,
}

impl<T> ResultPage<T> {
    /// Create a page of entities returned for `request`
    pub fn new(request: PageRequest, results: Vec<T>) -> Self {
        Self { request, results }
    }

    /// The request this page answers
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// The entities in this page, in source order
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Consume the page, returning its entities
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    /// Check whether the page holds as many entities as were requested,
    /// meaning more data may follow
    pub fn is_full(&self) -> bool {
        self.results.len() as u64 >= u64::from(self.request.page_size())
    }

    /// Decorate this page with a link to the following page
    ///
    /// The link is present exactly when the page is full. A collection
    /// whose total count is an exact multiple of the page size therefore
    /// links to one trailing empty page; ruling that out would cost a
    /// total-count round trip per page, which callers who care can make
    /// themselves via
    /// [`count`](crate::source::SupportsPagination::count).
    pub fn with_next(self, base_uri: &Url) -> ResultPageWithNext<T> {
        ResultPageWithNext::new(self, base_uri)
    }
}

// ============================================================================
// ResultPageWithNext
// ============================================================================

/// A [`ResultPage`] decorated with an optional link to the next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPageWithNext<T> {
    #[serde(flatten)]
    page: ResultPage<T>,
    next: Option<Url>,
}

impl<T> ResultPageWithNext<T> {
    /// Decorate `page`, computing the next link against `base_uri`
    pub fn new(page: ResultPage<T>, base_uri: &Url) -> Self {
        let next = page
            .is_full()
            .then(|| next_uri(base_uri, page.request().next()));
        Self { page, next }
    }

    /// The request this page answers
    pub fn request(&self) -> PageRequest {
        self.page.request()
    }

    /// The entities in this page, in source order
    pub fn results(&self) -> &[T] {
        self.page.results()
    }

    /// The link to the following page, absent when this page is short
    pub fn next(&self) -> Option<&Url> {
        self.next.as_ref()
    }

    /// Strip the decoration, returning the undecorated page
    pub fn into_page(self) -> ResultPage<T> {
        self.page
    }
}

/// Build a next-page link from `base_uri`, replacing its entire query
/// string with the page parameters while keeping scheme, host and path
fn next_uri(base_uri: &Url, request: PageRequest) -> Url {
    let mut uri = base_uri.clone();
    uri.query_pairs_mut()
        .clear()
        .append_pair(QUERY_PAGE, &request.page().to_string())
        .append_pair(QUERY_PAGE_SIZE, &request.page_size().to_string());
    uri
}
