// The Record derive emits `setlist::` paths; this lets it work inside the crate too.
extern crate self as setlist;

pub mod catalog;
mod config;
mod query;
mod reconcile;
mod record;
mod store;
mod version;

pub use config::{ConfigError, Settings};
pub use query::{
    create_page, fetch_page, keys, next_sort, CriteriaBuilder, ExactFilter, FilterKind,
    FilterParam, InMemoryPreferences, KeyOrder, ListQuery, ListResponse, ListView, OrderedKey,
    Page, PageSizeOption, PageSizePolicy, PageSizePreferences, QueryCriteria, RawParams,
    SearchParam, SortDirection, SortKey, SortOption, SortOrder, SortSelection, SortState,
    SortTransition, TextFilter, Window,
};
pub use reconcile::{
    ConflictReport, FailureKind, FieldDiff, Reconciler, WriteFailure, WriteOutcome,
};
pub use record::{
    compare_values, display_value, matches_key, searchable_text, FieldFormat, FieldPath, FieldSpec,
    Record, Versioned,
};
pub use store::{
    InMemoryRecordStore, RecordRepository, RecordStore, RecordsExt, StoreError, StoreResult,
    WriteRejection,
};
pub use version::VersionToken;

// Derive macro for Record, alongside the trait of the same name.
pub use setlist_macros::Record;
