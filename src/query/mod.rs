//! The list pipeline: criteria, sort state, paging.

mod criteria;
mod page_size;
mod pager;
mod params;
mod sort;
mod view;

pub use criteria::{
    CriteriaBuilder, ExactFilter, FilterKind, FilterParam, QueryCriteria, SearchParam, TextFilter,
};
pub use page_size::{InMemoryPreferences, PageSizeOption, PageSizePolicy, PageSizePreferences};
pub use pager::{create_page, fetch_page, Page, Window};
pub use params::{keys, RawParams};
pub use sort::{
    next_sort, KeyOrder, OrderedKey, SortDirection, SortKey, SortOption, SortOrder, SortSelection,
    SortState, SortTransition,
};
pub use view::{ListQuery, ListResponse, ListView};
