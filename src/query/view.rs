//! ListView - per-view configuration and the list request pipeline.
//!
//! raw params -> sort transition + criteria -> storage window -> page

use std::marker::PhantomData;

use tracing::debug;

use super::criteria::{CriteriaBuilder, QueryCriteria};
use super::pager::{fetch_page, Page};
use super::params::{keys, RawParams};
use super::sort::{SortDirection, SortOption, SortOrder, SortSelection, SortState, SortTransition};
use crate::record::{Record, Versioned};
use crate::store::{RecordStore, StoreResult};

/// Everything that distinguishes one list screen from another: its sortable
/// columns, default sort, search boxes, and selectors.
pub struct ListView<M> {
    /// Identifies the view, e.g. for remembered page sizes.
    pub key: &'static str,
    pub sort_options: &'static [SortOption],
    pub default_field: &'static str,
    pub default_direction: SortDirection,
    pub criteria: CriteriaBuilder,
    _marker: PhantomData<fn() -> M>,
}

impl<M> ListView<M> {
    pub const fn new(
        key: &'static str,
        sort_options: &'static [SortOption],
        default_field: &'static str,
        default_direction: SortDirection,
        criteria: CriteriaBuilder,
    ) -> Self {
        Self {
            key,
            sort_options,
            default_field,
            default_direction,
            criteria,
            _marker: PhantomData,
        }
    }
}

/// A list request after normalization, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub criteria: QueryCriteria,
    pub order: SortOrder,
    /// `None` when the request asked for a reset to the first page.
    pub page_index: Option<i64>,
}

/// What a list request hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse<M> {
    pub page: Page<Versioned<M>>,
    /// Resolved sort; echo it into the next request.
    pub sort: SortState,
    /// Any filter was applied.
    pub filtering: bool,
}

impl<M> ListResponse<M> {
    /// The sort parameters to embed in the next form or link.
    pub fn sort_params(&self) -> RawParams {
        RawParams::new()
            .with(keys::SORT_FIELD, self.sort.field.clone())
            .with(keys::SORT_DIRECTION, self.sort.direction.as_param())
    }
}

impl<M: Record> ListView<M> {
    pub fn sort_names(&self) -> Vec<&'static str> {
        self.sort_options.iter().map(|option| option.name).collect()
    }

    pub fn sort_option(&self, name: &str) -> Option<&'static SortOption> {
        self.sort_options.iter().find(|option| option.name == name)
    }

    pub fn default_sort(&self) -> SortState {
        SortState::new(self.default_field, self.default_direction)
    }

    /// The sort echoed by the previous response. Unknown fields and
    /// directions fall back to the view's defaults independently.
    pub fn echoed_sort(&self, params: &RawParams) -> SortState {
        let field = params
            .text(keys::SORT_FIELD)
            .filter(|field| self.sort_option(field).is_some())
            .unwrap_or(self.default_field);
        let direction = params
            .text(keys::SORT_DIRECTION)
            .and_then(SortDirection::parse)
            .unwrap_or(self.default_direction);
        SortState::new(field, direction)
    }

    pub fn resolve_sort(&self, params: &RawParams) -> SortTransition {
        let current = self.echoed_sort(params);
        let selection = params.text(keys::SORT_FIELD_ID).map(|field| SortSelection {
            field,
            direction: if params.flag(keys::SORT_DIRECTION_CHECK) {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        });
        current.next_with_selection(
            params.text(keys::ACTION_BUTTON),
            &self.sort_names(),
            selection,
        )
    }

    pub fn build(&self, params: &RawParams) -> ListQuery {
        let transition = self.resolve_sort(params);
        let order = self
            .sort_option(&transition.state.field)
            .map(|option| option.resolve(transition.state.direction))
            .unwrap_or_default();
        let page_index = if transition.reset_page {
            None
        } else {
            params.int(keys::PAGE)
        };

        ListQuery {
            criteria: self.criteria.build(params, transition.state),
            order,
            page_index,
        }
    }

    /// Run a list request end to end.
    pub fn run<S: RecordStore>(
        &self,
        store: &S,
        params: &RawParams,
        page_size: usize,
    ) -> StoreResult<ListResponse<M>> {
        let query = self.build(params);
        let page = fetch_page::<S, M>(
            store,
            &query.criteria,
            &query.order,
            query.page_index,
            page_size,
        )?;

        debug!(
            view = self.key,
            sort_field = %query.criteria.sort.field,
            sort_direction = %query.criteria.sort.direction,
            page = page.page_index,
            total_pages = page.total_pages,
            total_count = page.total_count,
            "list page resolved"
        );

        Ok(ListResponse {
            filtering: query.criteria.is_filtering(),
            sort: query.criteria.sort,
            page,
        })
    }
}
