//! QueryCriteria - the normalized description of one list request.

use serde_json::Value;

use super::params::RawParams;
use super::sort::SortState;
use crate::record::{matches_key, searchable_text};

/// Case-insensitive substring search over one or more fields (OR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    pub needle: String,
    pub fields: Vec<&'static str>,
}

impl TextFilter {
    pub fn matches(&self, doc: &Value) -> bool {
        let needle = self.needle.to_lowercase();
        self.fields.iter().any(|field| {
            searchable_text(&doc[*field])
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        })
    }
}

/// Exact match on one field, typically a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactFilter {
    pub field: &'static str,
    pub value: String,
}

impl ExactFilter {
    pub fn matches(&self, doc: &Value) -> bool {
        matches_key(&doc[self.field], &self.value)
    }
}

/// Filters and sort for one list request. All present predicates combine
/// with AND; absent ones are simply not there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria {
    pub text_filters: Vec<TextFilter>,
    pub exact_filters: Vec<ExactFilter>,
    pub sort: SortState,
}

impl QueryCriteria {
    pub fn new(sort: SortState) -> Self {
        Self {
            text_filters: Vec::new(),
            exact_filters: Vec::new(),
            sort,
        }
    }

    pub fn is_filtering(&self) -> bool {
        !self.text_filters.is_empty() || !self.exact_filters.is_empty()
    }

    pub fn matches(&self, doc: &Value) -> bool {
        self.text_filters.iter().all(|filter| filter.matches(doc))
            && self.exact_filters.iter().all(|filter| filter.matches(doc))
    }
}

/// A search box and the fields it searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParam {
    pub param: &'static str,
    pub fields: &'static [&'static str],
}

impl SearchParam {
    pub const fn new(param: &'static str, fields: &'static [&'static str]) -> Self {
        Self { param, fields }
    }
}

/// What an id filter's parameter must look like to count as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Any non-empty key.
    Key,
    /// An integer; anything else is absent.
    Integer,
}

/// A drop-down selector and the field it constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParam {
    pub param: &'static str,
    pub field: &'static str,
    pub kind: FilterKind,
}

impl FilterParam {
    pub const fn key(param: &'static str, field: &'static str) -> Self {
        Self {
            param,
            field,
            kind: FilterKind::Key,
        }
    }

    pub const fn integer(param: &'static str, field: &'static str) -> Self {
        Self {
            param,
            field,
            kind: FilterKind::Integer,
        }
    }

    fn read(&self, params: &RawParams) -> Option<String> {
        let value = match self.kind {
            FilterKind::Key => params.text(self.param).map(|v| v.trim().to_string()),
            FilterKind::Integer => params.int(self.param).map(|v| v.to_string()),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Turns raw parameters into predicates for a fixed set of search boxes and
/// selectors. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriteriaBuilder {
    pub searches: &'static [SearchParam],
    pub filters: &'static [FilterParam],
}

impl CriteriaBuilder {
    pub const fn new(searches: &'static [SearchParam], filters: &'static [FilterParam]) -> Self {
        Self { searches, filters }
    }

    pub fn build(&self, params: &RawParams, sort: SortState) -> QueryCriteria {
        let mut criteria = QueryCriteria::new(sort);

        for search in self.searches {
            if let Some(needle) = params.text(search.param) {
                criteria.text_filters.push(TextFilter {
                    needle: needle.to_string(),
                    fields: search.fields.to_vec(),
                });
            }
        }

        for filter in self.filters {
            if let Some(value) = filter.read(params) {
                criteria.exact_filters.push(ExactFilter {
                    field: filter.field,
                    value,
                });
            }
        }

        criteria
    }
}
