//! Data source contracts
//!
//! [`SupportsPagination`] is the capability a data source implements to
//! serve bounded slices of entities. [`Source`] is the registry-facing
//! trait for heterogeneous collections of sources, where paging support
//! is only known at run time; its [`pagination`](Source::pagination)
//! accessor answers the capability check. Statically typed call sites
//! skip [`Source`] entirely and bound on [`SupportsPagination`]
//! directly.

mod memory;

pub use memory::{ItemFilter, VecSource};


use crate::error::Result;
use crate::page::{PageRequest, ResultPage};
use async_trait::async_trait;

/// Short name of `T`, used in error messages and logs
pub(crate) fn entity_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

// ============================================================================
// SupportsPagination
// ============================================================================

/// Capability a data source implements to serve bounded slices
///
/// Both operations accept an optional [`Filter`](Self::Filter) and must
/// apply identical filter semantics, so a `count` describes the same
/// collection a `get_page` slices.
///
/// Cancellation is drop-based: dropping an in-flight future aborts the
/// call, and a dropped future can never be observed as a success.
/// Implementations that detect cooperative cancellation mid-call return
/// [`Error::Canceled`](crate::Error::Canceled) rather than a partial
/// result.
#[async_trait]
pub trait SupportsPagination<T>: Send + Sync {
    /// Opaque filter strategy applied by the source before slicing
    ///
    /// Owned by the source; this crate forwards filters unexamined.
    /// `?Sized`, so closure trait objects like
    /// `dyn Fn(&T) -> bool + Send + Sync` work without boxing at call
    /// sites.
    type Filter: ?Sized + Send + Sync;

    /// Total number of entities matching `filter`
    async fn count(&self, filter: Option<&Self::Filter>) -> Result<u64>;

    /// The slice of entities at `request`, after applying `filter`
    ///
    /// The slice starts at offset `(page - 1) * page_size` and holds at
    /// most `page_size` entities. A page past the end of the collection
    /// yields an empty result, not an error. Ordering is whatever the
    /// source and its filter produce; this crate imposes none.
    async fn get_page(
        &self,
        request: PageRequest,
        filter: Option<&Self::Filter>,
    ) -> Result<ResultPage<T>>;
}

// ============================================================================
// Source
// ============================================================================

/// A data source held in a heterogeneous registry
///
/// Sources advertise optional capabilities through accessors.
/// [`pagination`](Self::pagination) defaults to `None`; a pageable
/// source opts in by returning `Some(self)`.
pub trait Source<T>: Send + Sync {
    /// Filter strategy accepted by this source's capabilities
    type Filter: ?Sized + Send + Sync;

    /// Short entity-type name used in errors and logs
    fn entity_type(&self) -> &'static str {
        entity_name::<T>()
    }

    /// The pagination capability, when this source implements it
    fn pagination(&self) -> Option<&dyn SupportsPagination<T, Filter = Self::Filter>> {
        None
    }
}
