//! RecordStore - the storage collaborator the pipeline and reconciler run against.

use serde_json::Value;

use super::{StoreResult, WriteRejection};
use crate::query::{QueryCriteria, SortOrder, Window};
use crate::record::{Record, Versioned};
use crate::version::VersionToken;

/// Filterable, sortable, version-checked record storage.
///
/// Sorting honours every key of the `SortOrder` and then the record id, so
/// the order of any result set is total.
pub trait RecordStore: Send + Sync {
    /// Number of records of `M` matching the criteria.
    fn count<M: Record>(&self, criteria: &QueryCriteria) -> StoreResult<usize>;

    /// Matching records in `order`, skipping `offset` and returning at most `limit`.
    fn fetch_slice<M: Record>(
        &self,
        criteria: &QueryCriteria,
        order: &SortOrder,
        offset: usize,
        limit: usize,
    ) -> StoreResult<Vec<Versioned<M>>>;

    /// Count, let `window` place the page, then fetch it.
    ///
    /// The default issues two calls and can observe a write in between;
    /// stores that can read a snapshot should override it.
    fn fetch_window<M: Record>(
        &self,
        criteria: &QueryCriteria,
        order: &SortOrder,
        window: &dyn Fn(usize) -> Window,
    ) -> StoreResult<(Window, Vec<Versioned<M>>)> {
        let window = window(self.count::<M>(criteria)?);
        let items = self.fetch_slice(criteria, order, window.offset(), window.limit())?;
        Ok((window, items))
    }

    /// Current stored state of a record, bypassing any cache.
    fn get_raw<M: Record>(&self, id: &str) -> StoreResult<Option<Versioned<M>>>;

    /// Untyped read used to render foreign keys.
    fn get_value(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;

    /// Insert a new record; storage assigns its first version.
    fn insert<M: Record>(&self, record: &M) -> StoreResult<Versioned<M>>;

    /// Replace a record only if its stored version equals `expected`.
    /// Returns the newly assigned version.
    fn conditional_write<M: Record>(
        &self,
        record: &M,
        expected: &VersionToken,
    ) -> Result<VersionToken, WriteRejection>;

    /// Delete a record by id. Returns true if it existed.
    fn delete<M: Record>(&self, id: &str) -> StoreResult<bool>;
}
