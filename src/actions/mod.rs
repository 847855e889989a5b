//! Typed pagination actions and the dynamic capability bridge
//!
//! # Overview
//!
//! [`PaginationActions`] is the statically typed entry point:
//! constructing one requires a source that already implements
//! [`SupportsPagination`], so an ineligible source is rejected at
//! compile time. The free functions are the dynamic bridge for
//! heterogeneous [`Source`] registries, where eligibility is only known
//! at run time and an ineligible source surfaces
//! [`Error::CapabilityNotSupported`] without invoking anything on it.

mod query;

pub use query::{base_uri, page_request_from_query};


use crate::error::{Error, Result};
use crate::page::{PageRequest, ResultPage, ResultPageWithNext};
use crate::source::{Source, SupportsPagination};
use crate::types::StringMap;
use std::marker::PhantomData;
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// Typed Actions
// ============================================================================

/// Pagination actions over a source known to support paging
///
/// Holds the source together with the base URI next-page links are
/// built against, typically derived from the inbound request's own
/// scheme, host and path (see [`base_uri`]).
pub struct PaginationActions<S, T>
where
    S: SupportsPagination<T>,
{
    source: S,
    base_uri: Url,
    _entity: PhantomData<fn() -> T>,
}

impl<S, T> PaginationActions<S, T>
where
    S: SupportsPagination<T>,
{
    /// Wrap `source`, using `base_uri` for next-page links
    pub fn new(source: S, base_uri: Url) -> Self {
        Self {
            source,
            base_uri,
            _entity: PhantomData,
        }
    }

    /// The base URI next-page links are built against
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Total number of entities matching `filter`
    pub async fn count(&self, filter: Option<&S::Filter>) -> Result<u64> {
        self.source.count(filter).await
    }

    /// Fetch the page at `request` and decorate it with a next-page link
    pub async fn get_page(
        &self,
        request: PageRequest,
        filter: Option<&S::Filter>,
    ) -> Result<ResultPageWithNext<T>> {
        debug!(
            page = request.page(),
            page_size = request.page_size(),
            "serving page"
        );
        let result = self.source.get_page(request, filter).await?;
        Ok(result.with_next(&self.base_uri))
    }

    /// Parse a [`PageRequest`] out of `query`, then fetch and decorate it
    pub async fn get_page_from_query(
        &self,
        query: &StringMap,
        filter: Option<&S::Filter>,
    ) -> Result<ResultPageWithNext<T>> {
        self.get_page(page_request_from_query(query), filter).await
    }
}

// ============================================================================
// Dynamic Bridge
// ============================================================================

/// Resolve the pagination capability of a registry source
///
/// Fails synchronously with [`Error::CapabilityNotSupported`] when the
/// source did not opt in; nothing on the source is invoked in that
/// case, and the error is surfaced verbatim, never retried.
pub fn with_capability<T, S>(
    source: &S,
) -> Result<&dyn SupportsPagination<T, Filter = S::Filter>>
where
    S: Source<T> + ?Sized,
{
    source.pagination().ok_or_else(|| {
        warn!(
            entity_type = source.entity_type(),
            "pagination requested on a source without the capability"
        );
        Error::capability_not_supported(source.entity_type())
    })
}

/// Count entities through a registry source's pagination capability
pub async fn count<T, S>(source: &S, filter: Option<&S::Filter>) -> Result<u64>
where
    S: Source<T> + ?Sized,
{
    with_capability(source)?.count(filter).await
}

/// Fetch one page through a registry source's pagination capability
pub async fn get_page<T, S>(
    source: &S,
    request: PageRequest,
    filter: Option<&S::Filter>,
) -> Result<ResultPage<T>>
where
    S: Source<T> + ?Sized,
{
    with_capability(source)?.get_page(request, filter).await
}

/// Fetch one page through a registry source and decorate it with a
/// next-page link against `base_uri`
pub async fn get_page_with_next<T, S>(
    source: &S,
    request: PageRequest,
    base_uri: &Url,
    filter: Option<&S::Filter>,
) -> Result<ResultPageWithNext<T>>
where
    S: Source<T> + ?Sized,
{
    Ok(get_page(source, request, filter).await?.with_next(base_uri))
}
