//! Pager - slices one page out of a filtered, sorted result set.

use serde::Serialize;

use super::criteria::QueryCriteria;
use super::sort::SortOrder;
use crate::record::{Record, Versioned};
use crate::store::{RecordStore, StoreResult};

/// One page of results plus the metadata a pager control needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, always within `1..=total_pages`.
    pub page_index: usize,
    pub page_size: usize,
    /// Size of the filtered set before paging.
    pub total_count: usize,
    /// At least 1, even for an empty set.
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Resolved page position for a known total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub page_index: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Window {
    /// Clamp a requested page into range. A missing or non-positive request
    /// means page 1; a request past the end lands on the last page. A page
    /// size of 0 is treated as 1.
    pub fn resolve(requested: Option<i64>, page_size: usize, total_count: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size).max(1);
        let requested = requested
            .filter(|index| *index >= 1)
            .map(|index| usize::try_from(index).unwrap_or(usize::MAX))
            .unwrap_or(1);

        Self {
            page_index: requested.min(total_pages),
            page_size,
            total_count,
            total_pages,
        }
    }

    pub fn offset(&self) -> usize {
        (self.page_index - 1) * self.page_size
    }

    pub fn limit(&self) -> usize {
        self.page_size
    }

    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

/// Page an already filtered and sorted sequence.
pub fn create_page<T>(source: Vec<T>, page_index: Option<i64>, page_size: usize) -> Page<T> {
    let window = Window::resolve(page_index, page_size, source.len());
    let items = source
        .into_iter()
        .skip(window.offset())
        .take(window.limit())
        .collect();
    window.into_page(items)
}

/// Page a query against storage. Count and slice come from one store call,
/// so they observe the same snapshot when the store supports it.
pub fn fetch_page<S, M>(
    store: &S,
    criteria: &QueryCriteria,
    order: &SortOrder,
    page_index: Option<i64>,
    page_size: usize,
) -> StoreResult<Page<Versioned<M>>>
where
    S: RecordStore,
    M: Record,
{
    let (window, items) = store.fetch_window::<M>(criteria, order, &|total_count| {
        Window::resolve(page_index, page_size, total_count)
    })?;
    Ok(window.into_page(items))
}
