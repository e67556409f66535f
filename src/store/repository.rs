//! RecordRepository - typed accessor bundling storage, listing and saving for one record type.

use std::marker::PhantomData;

use super::{RecordStore, StoreResult};
use crate::query::{ListResponse, ListView, RawParams};
use crate::reconcile::{Reconciler, WriteOutcome};
use crate::record::{Record, Versioned};
use crate::version::VersionToken;

/// Typed repository wrapper for records of one type.
pub struct RecordRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: RecordStore, M: Record> RecordRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Get a record by ID.
    pub fn get(&self, id: &str) -> StoreResult<Option<Versioned<M>>> {
        self.store.get_raw(id)
    }

    /// Insert a new record. Fails if it already exists.
    pub fn insert(&self, record: &M) -> StoreResult<Versioned<M>> {
        self.store.insert(record)
    }

    /// Save an edit made against `version`, reconciling any conflict.
    pub fn save(&self, record: &M, version: &VersionToken) -> WriteOutcome<M> {
        Reconciler::new(self.store).reconcile(record, version)
    }

    /// Delete a record by ID. Returns true if it existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.store.delete::<M>(id)
    }

    /// Run a list request through `view`.
    pub fn list(
        &self,
        view: &ListView<M>,
        params: &RawParams,
        page_size: usize,
    ) -> StoreResult<ListResponse<M>> {
        view.run(self.store, params, page_size)
    }
}

/// Extension trait for typed record access on any RecordStore.
pub trait RecordsExt: RecordStore + Sized {
    /// Get a typed record repository.
    fn records<M: Record>(&self) -> RecordRepository<'_, Self, M> {
        RecordRepository::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
