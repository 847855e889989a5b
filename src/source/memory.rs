//! In-memory data source
//!
//! A `Vec`-backed source that implements the pagination capability,
//! useful as a reference implementation, in tests, and for small
//! collections that are already resident. Slicing is standard offset
//! pagination: skip `(page - 1) * page_size`, take `page_size`.

use super::{Source, SupportsPagination};
use crate::error::Result;
use crate::page::{PageRequest, ResultPage};
use async_trait::async_trait;

/// Predicate filter over borrowed items
pub type ItemFilter<T> = dyn Fn(&T) -> bool + Send + Sync;

/// An in-memory, `Vec`-backed pageable source
///
/// Pages follow the `Vec` order; a filter drops items before slicing,
/// so `count` and `get_page` always agree on the collection they
/// describe.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T> Default for VecSource<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> VecSource<T> {
    /// Create a source over `items`
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of items behind the source, ignoring any filter
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the source holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn matching<'a>(
        &'a self,
        filter: Option<&'a ItemFilter<T>>,
    ) -> impl Iterator<Item = &'a T> {
        self.items.iter().filter(move |item| match filter {
            Some(filter) => filter(item),
            None => true,
        })
    }
}

#[async_trait]
impl<T> SupportsPagination<T> for VecSource<T>
where
    T: Clone + Send + Sync,
{
    type Filter = ItemFilter<T>;

    async fn count(&self, filter: Option<&Self::Filter>) -> Result<u64> {
        Ok(self.matching(filter).count() as u64)
    }

    async fn get_page(
        &self,
        request: PageRequest,
        filter: Option<&Self::Filter>,
    ) -> Result<ResultPage<T>> {
        let results = self
            .matching(filter)
            .skip(request.offset() as usize)
            .take(request.page_size() as usize)
            .cloned()
            .collect();
        Ok(ResultPage::new(request, results))
    }
}

impl<T> Source<T> for VecSource<T>
where
    T: Clone + Send + Sync,
{
    type Filter = ItemFilter<T>;

    fn pagination(&self) -> Option<&dyn SupportsPagination<T, Filter = Self::Filter>> {
        Some(self)
    }
}
