//! Integration tests for saving edits with optimistic concurrency.

#[path = "../support/mod.rs"]
mod support;

mod failures;

use setlist::catalog::Musician;
use setlist::{InMemoryRecordStore, RecordsExt, VersionToken};

/// What an edit form holds after loading a musician: its values and the
/// version token from the hidden field.
pub fn open_form(store: &InMemoryRecordStore, id: &str) -> (Musician, VersionToken) {
    let loaded = store.records::<Musician>().get(id).unwrap().unwrap();
    (loaded.data, loaded.version)
}

/// Commit a change as some other user would.
pub fn edit_elsewhere(store: &InMemoryRecordStore, id: &str, change: impl FnOnce(&mut Musician)) {
    let (mut musician, version) = open_form(store, id);
    change(&mut musician);
    let outcome = store.records::<Musician>().save(&musician, &version);
    assert!(outcome.is_committed(), "{outcome:?}");
}
