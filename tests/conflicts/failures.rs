use serde_json::Value;
use setlist::catalog::Musician;
use setlist::{
    FailureKind, InMemoryRecordStore, QueryCriteria, Record, RecordStore, RecordsExt, SortOrder,
    StoreError, StoreResult, VersionToken, Versioned, Window, WriteOutcome, WriteRejection,
};

use crate::open_form;
use crate::support;

/// What a store does when asked for a conditional write.
enum OnWrite {
    /// The backend fails outright.
    Fail,
    /// The record is deleted between the version check and the re-read.
    DeleteThenMismatch,
}

/// Wraps the in-memory store and misbehaves on conditional writes.
struct FaultyStore {
    inner: InMemoryRecordStore,
    on_write: OnWrite,
}

impl RecordStore for FaultyStore {
    fn count<M: Record>(&self, criteria: &QueryCriteria) -> StoreResult<usize> {
        self.inner.count::<M>(criteria)
    }

    fn fetch_slice<M: Record>(
        &self,
        criteria: &QueryCriteria,
        order: &SortOrder,
        offset: usize,
        limit: usize,
    ) -> StoreResult<Vec<Versioned<M>>> {
        self.inner.fetch_slice(criteria, order, offset, limit)
    }

    fn fetch_window<M: Record>(
        &self,
        criteria: &QueryCriteria,
        order: &SortOrder,
        window: &dyn Fn(usize) -> Window,
    ) -> StoreResult<(Window, Vec<Versioned<M>>)> {
        self.inner.fetch_window(criteria, order, window)
    }

    fn get_raw<M: Record>(&self, id: &str) -> StoreResult<Option<Versioned<M>>> {
        self.inner.get_raw(id)
    }

    fn get_value(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        self.inner.get_value(collection, id)
    }

    fn insert<M: Record>(&self, record: &M) -> StoreResult<Versioned<M>> {
        self.inner.insert(record)
    }

    fn conditional_write<M: Record>(
        &self,
        record: &M,
        expected: &VersionToken,
    ) -> Result<VersionToken, WriteRejection> {
        match self.on_write {
            OnWrite::Fail => Err(WriteRejection::Failed(StoreError::Storage(
                "disk full".into(),
            ))),
            OnWrite::DeleteThenMismatch => {
                self.inner.delete::<M>(record.id())?;
                Err(WriteRejection::VersionMismatch {
                    current: expected.clone(),
                })
            }
        }
    }

    fn delete<M: Record>(&self, id: &str) -> StoreResult<bool> {
        self.inner.delete::<M>(id)
    }
}

fn faulty(on_write: OnWrite) -> FaultyStore {
    FaultyStore {
        inner: support::catalog(),
        on_write,
    }
}

#[test]
fn backend_failure_is_a_generic_write_failure() {
    let store = faulty(OnWrite::Fail);
    let (mut mine, version) = open_form(&store.inner, "m-05");
    mine.phone = "9055550199".into();

    let outcome = store.records::<Musician>().save(&mine, &version);

    let WriteOutcome::OtherWriteFailure(failure) = &outcome else {
        panic!("expected write failure, got {outcome:?}");
    };
    assert_eq!(failure.kind, FailureKind::Storage);
    assert_eq!(
        failure.to_string(),
        "Unable to save changes. Try again, and if the problem persists see your system administrator."
    );
    assert!(outcome.report().is_none());

    let (stored, _) = open_form(&store.inner, "m-05");
    assert_eq!(stored.phone, "9055550105");
}

#[test]
fn mismatch_that_finds_nothing_on_reread_is_gone() {
    let store = faulty(OnWrite::DeleteThenMismatch);
    let (mut mine, version) = open_form(&store.inner, "m-06");
    mine.phone = "9055550199".into();

    let outcome = store.records::<Musician>().save(&mine, &version);

    let WriteOutcome::RecordGone(report) = &outcome else {
        panic!("expected record gone, got {outcome:?}");
    };
    assert!(report.record_deleted);
    assert!(report.refreshed_version.is_none());
    assert!(report.resubmission.is_none());
    assert_eq!(
        report.summary,
        "Unable to save changes. The Musician was deleted by another user."
    );
}
